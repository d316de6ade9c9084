//! Logging setup
//!
//! Progress goes to stderr so `--json` output on stdout stays parseable.
//! `RUST_LOG` directives take precedence over the verbosity flags.

use tracing::Level;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

pub fn init(level: Level) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    let _ = tracing::subscriber::set_global_default(subscriber);
}
