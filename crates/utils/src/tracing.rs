// Copyright 2023-2025 Irreducible Inc.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs a global subscriber printing events filtered by `RUST_LOG`.
///
/// Safe to call more than once; only the first call takes effect.
pub fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer().with_test_writer())
		.try_init();
}
