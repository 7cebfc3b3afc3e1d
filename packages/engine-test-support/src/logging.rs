//! Unified test logging initialization
//!
//! One entry point for unit tests (via the engine's `#[ctor]` hook) and for
//! integration test binaries (via `tests/common`).

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize structured logging for tests.
///
/// Idempotent and race-safe; calling it more than once is a no-op. The level
/// is read in this order of precedence:
///
/// 1. `TEST_LOG` environment variable (preferred)
/// 2. `RUST_LOG` environment variable (fallback)
/// 3. `"warn"` (default, quiet)
///
/// ```bash
/// # See every phase transition the controller logs
/// TEST_LOG=mafia_engine=debug cargo test -p mafia-engine
/// ```
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // cargo test output capture
            .without_time()
            .try_init()
            .ok(); // another subscriber may already be installed
    });
}
