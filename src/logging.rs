//! Diagnostic tracing for the simulator.
//!
//! Reports go to stdout; tracing output goes to stderr so the two never mix.
//! `RUST_LOG` wins over the verbosity passed in.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Map `-v` occurrences to a default filter.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "dice_baseball=info",
        2 => "dice_baseball=debug",
        _ => "dice_baseball=trace",
    }
}

/// Install the global subscriber. Call once, from the binary.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
