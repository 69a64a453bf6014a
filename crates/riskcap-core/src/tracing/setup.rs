//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "RISKCAP_LOG";

/// Initialize the riskcap tracing/logging system.
///
/// Reads `RISKCAP_LOG` for per-module log levels, e.g.
/// `RISKCAP_LOG=riskcap_fuzzy=debug,riskcap_core=warn`.
///
/// Falls back to `riskcap=info` if `RISKCAP_LOG` is not set or is invalid.
/// Safe to call more than once. If the host process already installed a
/// global subscriber, that subscriber is kept.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("riskcap=info"));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
