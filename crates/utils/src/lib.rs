// Copyright 2025 Irreducible Inc.

//! Helpers shared by the BLAKE-256 crates: early-return macros, environment flags and
//! tracing setup for tests and benches.

pub mod env;
pub mod error_utils;
pub mod tracing;
