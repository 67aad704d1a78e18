// Copyright 2025 Irreducible Inc.

use crate::{
	compression::compress,
	consts::{BLOCK_SIZE, LENGTH_OFFSET, MARKER_OFFSET, PADDING_START, STATE_WORDS},
	salt::Salt,
};

/// Pads the buffered tail, appends the 64-bit message length and runs the final one or
/// two compressions on `h`.
///
/// `bit_len` is the length of the whole message. The counter of a block that holds no
/// message bits is not injected: that is the case for the lone padding block of a message
/// whose length is a multiple of 64 bytes, and for the second block when the tail leaves
/// no room for the length field.
pub(crate) fn finalize(
	h: &mut [u32; STATE_WORDS],
	salt: &Salt,
	tail: &[u8],
	bit_len: u64,
	marker: u8,
) {
	debug_assert!(tail.len() < BLOCK_SIZE);

	let mut block = [0u8; BLOCK_SIZE];
	block[..tail.len()].copy_from_slice(tail);
	block[tail.len()] = PADDING_START;

	if tail.len() <= MARKER_OFFSET {
		write_trailer(&mut block, bit_len, marker);
		let counter = (!tail.is_empty()).then_some(bit_len);
		compress(h, salt, counter, &block);
	} else {
		compress(h, salt, Some(bit_len), &block);

		let mut block = [0u8; BLOCK_SIZE];
		write_trailer(&mut block, bit_len, marker);
		compress(h, salt, None, &block);
	}
}

#[inline]
fn write_trailer(block: &mut [u8; BLOCK_SIZE], bit_len: u64, marker: u8) {
	block[MARKER_OFFSET] |= marker;
	block[LENGTH_OFFSET..].copy_from_slice(&bit_len.to_be_bytes());
}
