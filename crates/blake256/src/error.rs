// Copyright 2025 Irreducible Inc.

use crate::consts::SALT_SIZE;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("salt must be exactly {expected} bytes, got {actual}")]
	InvalidSaltLength { expected: usize, actual: usize },
}

impl Error {
	pub(crate) fn invalid_salt_length(actual: usize) -> Self {
		Self::InvalidSaltLength {
			expected: SALT_SIZE,
			actual,
		}
	}
}
