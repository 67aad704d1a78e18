// Copyright 2025 Irreducible Inc.

use blake256::{
	blake224, blake224_salted, blake256, blake256_salted, Blake224, Blake256, Digest, Salt,
};
use blake256_utils::{env::boolean_env_flag_set, tracing::init_tracing};
use proptest::{prelude::*, sample::Index};

const EXHAUSTIVE_ENV_NAME: &str = "BLAKE256_TEST_EXHAUSTIVE";

fn reference_256(data: &[u8]) -> Vec<u8> {
	<blake_crypto::Blake256 as digest_09::Digest>::digest(data).to_vec()
}

fn reference_224(data: &[u8]) -> Vec<u8> {
	<blake_crypto::Blake224 as digest_09::Digest>::digest(data).to_vec()
}

fn split_points(len: usize, cuts: &[Index]) -> Vec<usize> {
	let mut points = cuts.iter().map(|cut| cut.index(len + 1)).collect::<Vec<_>>();
	points.push(0);
	points.push(len);
	points.sort_unstable();
	points
}

fn bit_distance(a: &[u8], b: &[u8]) -> u32 {
	a.iter().zip(b).map(|(x, y)| (x ^ y).count_ones()).sum()
}

proptest! {
	#[test]
	fn test_blake256_vs_reference(
		input in prop::collection::vec(any::<u8>(), 0..=2048),
	) {
		let digest = Blake256::digest(&input);
		let expected = reference_256(&input);
		prop_assert_eq!(&digest[..], &expected[..]);
	}

	#[test]
	fn test_blake224_vs_reference(
		input in prop::collection::vec(any::<u8>(), 0..=2048),
	) {
		let digest = Blake224::digest(&input);
		let expected = reference_224(&input);
		prop_assert_eq!(&digest[..], &expected[..]);
	}

	#[test]
	fn test_chunking_invariance(
		input in prop::collection::vec(any::<u8>(), 0..=1024),
		cuts in prop::collection::vec(any::<Index>(), 0..8),
	) {
		let points = split_points(input.len(), &cuts);

		let mut hasher_256 = Blake256::new();
		let mut hasher_224 = Blake224::new();
		for window in points.windows(2) {
			let chunk = &input[window[0]..window[1]];
			hasher_256.update(chunk);
			hasher_224.update(chunk);
		}

		prop_assert_eq!(hasher_256.finalize(), Blake256::digest(&input));
		prop_assert_eq!(hasher_224.finalize(), Blake224::digest(&input));
	}

	#[test]
	fn test_distinct_salts_disagree(
		input in prop::collection::vec(any::<u8>(), 0..=256),
		salt_a in any::<[u8; 16]>(),
		salt_b in any::<[u8; 16]>(),
	) {
		prop_assume!(salt_a != salt_b);
		let (salt_a, salt_b) = (Salt::from(salt_a), Salt::from(salt_b));
		prop_assert_ne!(blake256_salted(&salt_a, &input), blake256_salted(&salt_b, &input));
		prop_assert_ne!(blake224_salted(&salt_a, &input), blake224_salted(&salt_b, &input));
	}

	#[test]
	fn test_salted_constructors_agree(
		input in prop::collection::vec(any::<u8>(), 0..=256),
		salt in any::<[u8; 16]>(),
	) {
		let hasher = Blake256::try_with_salt(&salt).expect("16-byte salt");
		let digest: [u8; 32] = hasher.chain_update(&input).finalize().into();
		prop_assert_eq!(digest, blake256_salted(&Salt::from(salt), &input));
	}
}

#[test]
fn test_length_sweep_against_reference() {
	init_tracing();

	let max_len = if boolean_env_flag_set(EXHAUSTIVE_ENV_NAME) {
		2048
	} else {
		130
	};
	let data = (0..max_len).map(|i| (i * 7 + 3) as u8).collect::<Vec<_>>();
	for len in 0..=max_len {
		let input = &data[..len];
		assert_eq!(blake256(input)[..], reference_256(input)[..], "BLAKE-256 of {len} bytes");
		assert_eq!(blake224(input)[..], reference_224(input)[..], "BLAKE-224 of {len} bytes");
	}
}

#[test]
fn test_determinism() {
	let input = b"same bytes, independent states";
	assert_eq!(Blake256::digest(input), Blake256::digest(input));
	assert_eq!(blake224(input), blake224(input));
}

#[test]
fn test_avalanche() {
	for len in [1usize, 8, 55, 56, 63, 64, 65, 100, 128, 200] {
		let input = (0..len).map(|i| (i * 31 + 7) as u8).collect::<Vec<_>>();
		let base_256 = blake256(&input);
		let base_224 = blake224(&input);

		for bit in (0..8 * len).step_by((8 * len / 16).max(1)) {
			let mut flipped = input.clone();
			flipped[bit / 8] ^= 1 << (bit % 8);

			let distance = bit_distance(&base_256, &blake256(&flipped));
			assert!((64..=192).contains(&distance), "{len} bytes, bit {bit}: {distance}");
			let distance = bit_distance(&base_224, &blake224(&flipped));
			assert!((56..=168).contains(&distance), "{len} bytes, bit {bit}: {distance}");
		}
	}
}

#[cfg(not(feature = "bail_panic"))]
#[test]
fn test_invalid_salt_length() {
	let err = Blake224::try_with_salt(&[0u8; 8]).expect_err("8-byte salt");
	assert_eq!(err.to_string(), "salt must be exactly 16 bytes, got 8");
	assert!(Blake256::try_with_salt(&[0u8; 17]).is_err());
}
