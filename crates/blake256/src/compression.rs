// Copyright 2025 Irreducible Inc.

use crate::{
	consts::{BLOCK_SIZE, BLOCK_WORDS, G_INDICES, ROUNDS, SIGMA, STATE_WORDS, U256},
	salt::Salt,
};

/// Compresses one 64-byte block into the chain value `h`.
///
/// `counter` is the message bit count injected into the last four words of the working
/// array. `None` leaves those words untouched, which finalization uses for blocks that
/// hold nothing but padding.
pub fn compress(
	h: &mut [u32; STATE_WORDS],
	salt: &Salt,
	counter: Option<u64>,
	block: &[u8; BLOCK_SIZE],
) {
	let mut m = [0u32; BLOCK_WORDS];
	for (word, chunk) in m.iter_mut().zip(block.chunks_exact(4)) {
		*word = u32::from_be_bytes(chunk.try_into().expect("chunk is 4 bytes"));
	}

	let mut v = [0u32; BLOCK_WORDS];
	v[..STATE_WORDS].copy_from_slice(h);
	for i in 0..4 {
		v[8 + i] = U256[i] ^ salt[i];
	}
	v[12..].copy_from_slice(&U256[4..8]);
	if let Some(t) = counter {
		let (lo, hi) = (t as u32, (t >> 32) as u32);
		v[12] ^= lo;
		v[13] ^= lo;
		v[14] ^= hi;
		v[15] ^= hi;
	}

	for r in 0..ROUNDS {
		round(&mut v, &m, &SIGMA[r % SIGMA.len()]);
	}

	for (k, h) in h.iter_mut().enumerate() {
		*h ^= v[k] ^ v[k + 8] ^ salt[k % 4];
	}
}

#[inline(always)]
fn round(v: &mut [u32; BLOCK_WORDS], m: &[u32; BLOCK_WORDS], sigma: &[usize; BLOCK_WORDS]) {
	for (step, &[a, b, c, d]) in G_INDICES.iter().enumerate() {
		let i = sigma[2 * step];
		let j = sigma[2 * step + 1];
		g(v, a, b, c, d, m[i] ^ U256[j], m[j] ^ U256[i]);
	}
}

#[inline(always)]
fn g(v: &mut [u32; BLOCK_WORDS], a: usize, b: usize, c: usize, d: usize, x: u32, y: u32) {
	v[a] = v[a].wrapping_add(x).wrapping_add(v[b]);
	v[d] = (v[d] ^ v[a]).rotate_right(16);
	v[c] = v[c].wrapping_add(v[d]);
	v[b] = (v[b] ^ v[c]).rotate_right(12);
	v[a] = v[a].wrapping_add(y).wrapping_add(v[b]);
	v[d] = (v[d] ^ v[a]).rotate_right(8);
	v[c] = v[c].wrapping_add(v[d]);
	v[b] = (v[b] ^ v[c]).rotate_right(7);
}
