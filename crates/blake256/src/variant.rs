// Copyright 2025 Irreducible Inc.

use digest::{
	consts::{U28, U32},
	generic_array::ArrayLength,
};

use crate::consts::{IV224, IV256, STATE_WORDS};

mod private {
	pub trait Sealed {}
}

/// Selects one of the two BLAKE output widths.
///
/// The width fixes the initial chain value, the marker byte that closes the padding and
/// the number of chain words serialized into the digest.
pub trait Variant: private::Sealed + Clone + Default + 'static {
	type OutputSize: ArrayLength<u8> + 'static;

	const IV: [u32; STATE_WORDS];

	/// OR-ed into the byte just before the length field.
	const MARKER: u8;

	const NAME: &'static str;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Width256;

#[derive(Debug, Default, Clone, Copy)]
pub struct Width224;

impl private::Sealed for Width256 {}
impl private::Sealed for Width224 {}

impl Variant for Width256 {
	type OutputSize = U32;

	const IV: [u32; STATE_WORDS] = IV256;
	const MARKER: u8 = 0x01;
	const NAME: &'static str = "BLAKE-256";
}

impl Variant for Width224 {
	type OutputSize = U28;

	const IV: [u32; STATE_WORDS] = IV224;
	const MARKER: u8 = 0x00;
	const NAME: &'static str = "BLAKE-224";
}
