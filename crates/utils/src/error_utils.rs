// Copyright 2024-2025 Irreducible Inc.

/// Returns early from the enclosing function with `$err` converted into its error type.
///
/// When the `bail_panic` feature is enabled the error panics instead, so rejected
/// arguments abort at the call site rather than travelling up as a `Result`.
#[cfg(feature = "bail_panic")]
#[macro_export]
macro_rules! bail {
	($err:expr) => {
		panic!("{}", $err)
	};
}

/// Returns early from the enclosing function with `$err` converted into its error type.
#[cfg(not(feature = "bail_panic"))]
#[macro_export]
macro_rules! bail {
	($err:expr) => {
		return Err($err.into())
	};
}

/// Bails with `$err` unless `$cond` holds.
#[macro_export]
macro_rules! ensure {
	($cond:expr, $err:expr) => {
		if !$cond {
			$crate::bail!($err);
		}
	};
}
