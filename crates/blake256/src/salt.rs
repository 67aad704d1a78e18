// Copyright 2025 Irreducible Inc.

use std::ops::Index;

use blake256_utils::ensure;

use crate::{
	consts::{SALT_SIZE, SALT_WORDS},
	error::Error,
};

/// A 128-bit BLAKE salt, stored as four big-endian words.
///
/// The all-zero salt is the unsalted hash.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Salt([u32; SALT_WORDS]);

impl Salt {
	pub const ZERO: Self = Self([0; SALT_WORDS]);

	pub fn from_bytes(bytes: &[u8; SALT_SIZE]) -> Self {
		let mut words = [0u32; SALT_WORDS];
		for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
			*word = u32::from_be_bytes(chunk.try_into().expect("chunk is 4 bytes"));
		}
		Self(words)
	}

	pub fn to_bytes(&self) -> [u8; SALT_SIZE] {
		let mut out = [0u8; SALT_SIZE];
		for (chunk, word) in out.chunks_exact_mut(4).zip(self.0) {
			chunk.copy_from_slice(&word.to_be_bytes());
		}
		out
	}

	pub fn words(&self) -> &[u32; SALT_WORDS] {
		&self.0
	}

	pub fn is_zero(&self) -> bool {
		self.0 == [0; SALT_WORDS]
	}
}

impl From<[u8; SALT_SIZE]> for Salt {
	fn from(bytes: [u8; SALT_SIZE]) -> Self {
		Self::from_bytes(&bytes)
	}
}

impl TryFrom<&[u8]> for Salt {
	type Error = Error;

	fn try_from(bytes: &[u8]) -> Result<Self, Error> {
		if bytes.len() != SALT_SIZE {
			tracing::debug!(len = bytes.len(), "rejecting salt");
		}
		ensure!(bytes.len() == SALT_SIZE, Error::invalid_salt_length(bytes.len()));

		let bytes: &[u8; SALT_SIZE] = bytes.try_into().expect("length checked above");
		Ok(Self::from_bytes(bytes))
	}
}

impl Index<usize> for Salt {
	type Output = u32;

	fn index(&self, index: usize) -> &u32 {
		&self.0[index]
	}
}
