//! Logging setup utilities for the Petri binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with the specified default log level.
///
/// The binary's crate (library and `bin` share the target name) and
/// `tower_http` log at `default_log_level`. `RUST_LOG` overrides it.
///
/// # Arguments
///
/// * `binary_name` - The name of the binary (e.g., "petri-server")
/// * `default_log_level` - The default log level (e.g., "debug", "info")
///
/// # Examples
///
/// ```no_run
/// use petri_shared::logger::setup_logger;
///
/// setup_logger("petri-server", "debug");
/// ```
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    let crate_target = binary_name.replace('-', "_");
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "{}={},tower_http={}",
                    crate_target, default_log_level, default_log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
