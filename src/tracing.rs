//! Tracing initialization.
//!
//! Logs always go to stderr; stdout is reserved for the JSON result, even when
//! the binary runs under a test harness.

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

static INIT: Once = Once::new();

/// Initialize tracing. Safe to call multiple times.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` selects debug over warn.
pub fn init(verbose: bool) {
    INIT.call_once(|| {
        let default_level = if verbose { "debug" } else { "warn" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("delphi={}", default_level)));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(true)
            .with_span_events(FmtSpan::NONE)
            .compact()
            .with_writer(std::io::stderr);

        if let Err(e) = builder.try_init() {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });
}
