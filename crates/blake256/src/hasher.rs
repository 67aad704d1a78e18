// Copyright 2025 Irreducible Inc.

use core::fmt;
use std::marker::PhantomData;

use digest::{
	core_api::{AlgorithmName, BlockSizeUser},
	consts::U64,
	FixedOutput, FixedOutputReset, HashMarker, Output, OutputSizeUser, Reset, Update,
};

use crate::{
	compression::compress,
	consts::{BLOCK_BITS, BLOCK_SIZE, STATE_WORDS},
	error::Error,
	padding,
	salt::Salt,
	variant::{Variant, Width224, Width256},
};

/// Streaming BLAKE hasher, generic over the output width.
///
/// Input is buffered until a full block is available. Finalization works on a copy of
/// the chain value, so [`Blake::finalize_snapshot`] can be called at any point without
/// disturbing further updates.
#[derive(Clone)]
pub struct Blake<V: Variant> {
	// Chain value
	h: [u32; STATE_WORDS],
	salt: Salt,
	// Message bits compressed so far
	t: u64,
	buffer: [u8; BLOCK_SIZE],
	filled_bytes: usize,
	_variant: PhantomData<V>,
}

/// BLAKE-256 hasher state.
pub type Blake256 = Blake<Width256>;
/// BLAKE-224 hasher state.
pub type Blake224 = Blake<Width224>;

impl<V: Variant> Default for Blake<V> {
	fn default() -> Self {
		Self::with_salt(Salt::ZERO)
	}
}

impl<V: Variant> Blake<V> {
	pub fn with_salt(salt: Salt) -> Self {
		Self {
			h: V::IV,
			salt,
			t: 0,
			buffer: [0; BLOCK_SIZE],
			filled_bytes: 0,
			_variant: PhantomData,
		}
	}

	/// Constructs a salted hasher from raw bytes, which must be exactly 16 bytes long.
	pub fn try_with_salt(salt: &[u8]) -> Result<Self, Error> {
		Ok(Self::with_salt(Salt::try_from(salt)?))
	}

	pub fn salt(&self) -> &Salt {
		&self.salt
	}

	/// Number of message bits written so far, modulo 2^64.
	pub fn message_bits(&self) -> u64 {
		self.t.wrapping_add(8 * self.filled_bytes as u64)
	}

	/// Returns the digest of everything written so far and leaves the hasher untouched.
	pub fn finalize_snapshot(&self) -> Output<Self> {
		let mut out = Output::<Self>::default();
		self.finalize_inner(&mut out);
		out
	}

	fn compress_block(&mut self, block: &[u8; BLOCK_SIZE]) {
		self.t = self.t.wrapping_add(BLOCK_BITS);
		compress(&mut self.h, &self.salt, Some(self.t), block);
	}

	fn finalize_inner(&self, out: &mut Output<Self>) {
		let mut h = self.h;
		padding::finalize(
			&mut h,
			&self.salt,
			&self.buffer[..self.filled_bytes],
			self.message_bits(),
			V::MARKER,
		);

		for (chunk, word) in out.chunks_exact_mut(4).zip(h) {
			chunk.copy_from_slice(&word.to_be_bytes());
		}
	}
}

impl<V: Variant> HashMarker for Blake<V> {}

impl<V: Variant> Update for Blake<V> {
	fn update(&mut self, mut data: &[u8]) {
		if self.filled_bytes != 0 {
			let to_copy = std::cmp::min(data.len(), BLOCK_SIZE - self.filled_bytes);
			self.buffer[self.filled_bytes..self.filled_bytes + to_copy]
				.copy_from_slice(&data[..to_copy]);
			data = &data[to_copy..];
			self.filled_bytes += to_copy;

			if self.filled_bytes == BLOCK_SIZE {
				let block = self.buffer;
				self.compress_block(&block);
				self.filled_bytes = 0;
			}
		}

		let mut chunks = data.chunks_exact(BLOCK_SIZE);
		for chunk in &mut chunks {
			self.compress_block(chunk.try_into().expect("chunk is 64 bytes"));
		}

		let remaining = chunks.remainder();
		if !remaining.is_empty() {
			self.buffer[..remaining.len()].copy_from_slice(remaining);
			self.filled_bytes = remaining.len();
		}
	}
}

impl<V: Variant> OutputSizeUser for Blake<V> {
	type OutputSize = V::OutputSize;
}

impl<V: Variant> BlockSizeUser for Blake<V> {
	type BlockSize = U64;
}

impl<V: Variant> FixedOutput for Blake<V> {
	fn finalize_into(self, out: &mut Output<Self>) {
		self.finalize_inner(out);
	}
}

impl<V: Variant> Reset for Blake<V> {
	fn reset(&mut self) {
		*self = Self::with_salt(self.salt);
	}
}

impl<V: Variant> FixedOutputReset for Blake<V> {
	fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
		self.finalize_inner(out);
		Reset::reset(self);
	}
}

impl<V: Variant> AlgorithmName for Blake<V> {
	fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(V::NAME)
	}
}

impl<V: Variant> fmt::Debug for Blake<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {{ ... }}", V::NAME)
	}
}
