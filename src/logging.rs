//! Structured logging setup
//!
//! The engine reports through `tracing`: `info` for each finished line-count
//! configuration, `debug` per trial and `trace` per routed arrival. `RUST_LOG`
//! overrides the level passed in, e.g.
//!
//! ```bash
//! RUST_LOG=queue_wait_sim::simulation=debug queue-wait-sim --arrival-rate 4 --max-lines 6
//! ```

use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a formatted subscriber writing to stderr.
///
/// # Arguments
/// * `level` - Default filter when `RUST_LOG` is unset: "trace", "debug",
///   "info", "warn" or "error".
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("queue_wait_sim={}", level)));

    // A second call (as in tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .try_init();
}
