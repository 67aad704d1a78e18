// Copyright 2025 Irreducible Inc.

use digest::Digest;
use tracing::instrument;

use crate::{
	consts::{BLAKE224_OUTPUT_SIZE, BLAKE256_OUTPUT_SIZE},
	hasher::{Blake224, Blake256},
	salt::Salt,
};

/// BLAKE-256 digest of `data`.
#[instrument(skip_all, level = "trace", fields(len = data.len()))]
pub fn blake256(data: &[u8]) -> [u8; BLAKE256_OUTPUT_SIZE] {
	Blake256::digest(data).into()
}

/// BLAKE-224 digest of `data`.
#[instrument(skip_all, level = "trace", fields(len = data.len()))]
pub fn blake224(data: &[u8]) -> [u8; BLAKE224_OUTPUT_SIZE] {
	Blake224::digest(data).into()
}

#[instrument(skip_all, level = "trace", fields(len = data.len()))]
pub fn blake256_salted(salt: &Salt, data: &[u8]) -> [u8; BLAKE256_OUTPUT_SIZE] {
	Blake256::with_salt(*salt).chain_update(data).finalize().into()
}

#[instrument(skip_all, level = "trace", fields(len = data.len()))]
pub fn blake224_salted(salt: &Salt, data: &[u8]) -> [u8; BLAKE224_OUTPUT_SIZE] {
	Blake224::with_salt(*salt).chain_update(data).finalize().into()
}
