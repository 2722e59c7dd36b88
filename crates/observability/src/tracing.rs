//! Tracing initialization.
//!
//! The catalog services emit structured events (`debug` for reads, `info`
//! for mutations); this wires them to a JSON subscriber filtered through
//! `RUST_LOG`.

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the process, falling back to `info` when
/// `RUST_LOG` is unset. Safe to call multiple times; subsequent calls are
/// no-ops.
pub fn init() {
    init_with("info");
}

/// Initialize tracing with an explicit fallback directive for when
/// `RUST_LOG` is unset.
pub fn init_with(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
