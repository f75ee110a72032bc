//! Logging setup for the command-line front end.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing output to stderr, leaving stdout to the report.
///
/// The filter can be overridden with the `RUST_LOG` environment variable;
/// otherwise `level` applies to this binary and the core stays at `warn`.
pub fn init(level: &str) {
    let default_filter = format!("prodmix={level},prodmix_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .init();
}
