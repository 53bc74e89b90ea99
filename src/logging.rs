//! Diagnostic tracing to stderr.
//!
//! Controlled by `RUST_LOG`; defaults to `warn`. The fatal "not set" diagnostics are
//! printed independently of this, so they appear even with tracing disabled.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(fmt::layer().with_writer(std::io::stderr).compact())
		.try_init();
}
