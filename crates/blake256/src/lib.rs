// Copyright 2025 Irreducible Inc.

//! BLAKE-256 and BLAKE-224, the 32-bit members of the BLAKE hash family, with the
//! optional 128-bit salt.
//!
//! [`Blake256`] and [`Blake224`] implement the [`digest`] traits, so the usual streaming
//! API applies:
//!
//! ```
//! use blake256::{Blake256, Digest};
//!
//! let mut hasher = Blake256::new();
//! hasher.update(b"The quick brown fox ");
//! hasher.update(b"jumps over the lazy dog");
//! let out: [u8; 32] = hasher.finalize().into();
//! assert_eq!(out, blake256::blake256(b"The quick brown fox jumps over the lazy dog"));
//! ```

pub mod compression;
pub mod consts;
mod error;
mod hasher;
mod oneshot;
mod padding;
mod salt;
pub mod variant;

pub use consts::{BLAKE224_OUTPUT_SIZE, BLAKE256_OUTPUT_SIZE, BLOCK_SIZE, SALT_SIZE};
pub use digest::{self, Digest};
pub use error::Error;
pub use hasher::*;
pub use oneshot::*;
pub use salt::Salt;
