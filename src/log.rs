//! Logging setup: `tracing` events formatted to stderr.
//!
//! `RUST_LOG` wins over the level passed on the command line.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // a second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
