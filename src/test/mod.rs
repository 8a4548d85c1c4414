//! Helpers shared by the in-crate tests.

use std::sync::Once;

use tracing_subscriber::EnvFilter;


static LOGGING: Once = Once::new();

/// Installs a global `tracing` subscriber for tests, filtered by `RUST_LOG`.
pub(crate) fn init_logging() {
    LOGGING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        // Another test harness may already have installed one.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
