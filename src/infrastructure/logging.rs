//! Diagnostic logging setup

use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter directives
pub const LOG_ENV: &str = "MOODJOUR_LOG";

const DEFAULT_LOG_DIRECTIVES: &str = "warn";

/// Install a stderr subscriber filtered by `MOODJOUR_LOG`. Only the first
/// call has an effect.
pub fn init_logging() {
    static LOGGER_INIT: OnceLock<()> = OnceLock::new();

    LOGGER_INIT.get_or_init(|| {
        let env_filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVES));

        // Another subscriber may already be installed (e.g. by a test harness)
        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .try_init();
    });
}
