// Copyright 2025 Irreducible Inc.

//! Fixed parameters of BLAKE-256 and BLAKE-224.

/// Size of a message block in bytes.
pub const BLOCK_SIZE: usize = 64;

/// Number of message bits consumed by one compression.
pub const BLOCK_BITS: u64 = 8 * BLOCK_SIZE as u64;

/// Size of a BLAKE-256 digest in bytes.
pub const BLAKE256_OUTPUT_SIZE: usize = 32;

/// Size of a BLAKE-224 digest in bytes.
pub const BLAKE224_OUTPUT_SIZE: usize = 28;

/// Size of a salt in bytes.
pub const SALT_SIZE: usize = 16;

pub(crate) const STATE_WORDS: usize = 8;
pub(crate) const SALT_WORDS: usize = 4;
pub(crate) const BLOCK_WORDS: usize = 16;

/// Rounds of the G-mixing network per compression.
pub(crate) const ROUNDS: usize = 14;

/// Offset of the byte that carries the width marker, right before the 64-bit length field.
pub(crate) const LENGTH_OFFSET: usize = BLOCK_SIZE - 8;
pub(crate) const MARKER_OFFSET: usize = LENGTH_OFFSET - 1;

pub(crate) const PADDING_START: u8 = 0x80;

pub(crate) const IV256: [u32; STATE_WORDS] = [
	0x6A09E667, 0xBB67AE85, 0x3C6EF372, 0xA54FF53A, 0x510E527F, 0x9B05688C, 0x1F83D9AB, 0x5BE0CD19,
];

pub(crate) const IV224: [u32; STATE_WORDS] = [
	0xC1059ED8, 0x367CD507, 0x3070DD17, 0xF70E5939, 0xFFC00B31, 0x68581511, 0x64F98FA7, 0xBEFA4FA4,
];

/// The leading fractional digits of pi.
pub(crate) const U256: [u32; BLOCK_WORDS] = [
	0x243F6A88, 0x85A308D3, 0x13198A2E, 0x03707344, 0xA4093822, 0x299F31D0, 0x082EFA98, 0xEC4E6C89,
	0x452821E6, 0x38D01377, 0xBE5466CF, 0x34E90C6C, 0xC0AC29B7, 0xC97C50DD, 0x3F84D5B5, 0xB5470917,
];

/// Message word permutations. Round `r` uses row `r % 10`.
pub(crate) const SIGMA: [[usize; BLOCK_WORDS]; 10] = [
	[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
	[14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
	[11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
	[7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
	[9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
	[2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
	[12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
	[13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
	[6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
	[10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
];

/// Working-array indices `(a, b, c, d)` of the four column steps followed by the four
/// diagonal steps of a round.
pub(crate) const G_INDICES: [[usize; 4]; 8] = [
	[0, 4, 8, 12],
	[1, 5, 9, 13],
	[2, 6, 10, 14],
	[3, 7, 11, 15],
	[0, 5, 10, 15],
	[1, 6, 11, 12],
	[2, 7, 8, 13],
	[3, 4, 9, 14],
];
