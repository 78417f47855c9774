//! Tracing setup
//!
//! Log output goes to stderr so it never mixes with a piped report.

use std::sync::Once;

/// Environment variable holding a tracing filter, e.g. `payday=trace`
pub const LOG_ENV_VAR: &str = "PAYDAY_LOG";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber
///
/// `PAYDAY_LOG` wins when set; otherwise warnings only, or debug output with
/// `verbose`.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let default_directive = if verbose { "payday=debug" } else { "payday=warn" };
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(default_directive));

        // a subscriber may already be installed by an embedding test harness
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_idempotent() {
        super::init_tracing(false);
        super::init_tracing(true);
    }
}
