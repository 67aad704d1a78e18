// Copyright 2024-2025 Irreducible Inc.

use std::env;

const TRUTHY: [&str; 4] = ["1", "on", "true", "yes"];

/// Read boolean flag from the environment variable.
///
/// Unset, non-unicode or unrecognised values read as `false`. Matching ignores case and
/// surrounding whitespace.
pub fn boolean_env_flag_set(flag: &str) -> bool {
	match env::var(flag) {
		Ok(val) => parse_flag(&val),
		Err(_) => false,
	}
}

fn parse_flag(val: &str) -> bool {
	let val = val.trim();
	TRUTHY.iter().any(|truthy| truthy.eq_ignore_ascii_case(val))
}
