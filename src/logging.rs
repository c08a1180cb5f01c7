//! Diagnostic tracing for the patrol binary.
//!
//! Library code only emits `tracing` events; nothing is printed unless a
//! subscriber is installed. The binary installs one through `init`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_DIRECTIVE: &str = "warn";

/// Install a stderr subscriber filtered by `RUST_LOG`.
///
/// `RUST_LOG=patrol=info` shows the start and end of each obstruction
/// search, `debug` adds grid parsing and run summaries, and `trace` logs
/// every obstruction trial.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    let stderr = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry().with(filter).with(stderr).init();
}
