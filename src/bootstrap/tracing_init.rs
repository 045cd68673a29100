//! Tracing initialization utilities.

use tracing_subscriber::{fmt, prelude::*, util::TryInitError, EnvFilter};

/// Filter used by the `bruno-env` binary when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "bruno_env=info";

fn build_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Initialize tracing with the given default filter.
///
/// The filter can be overridden by the `RUST_LOG` environment variable.
/// Events go to stderr so stdout carries only the generated text.
///
/// Panics if a global subscriber is already installed; use
/// [`try_init_tracing`] when that can happen.
///
/// # Example
///
/// ```rust,no_run
/// use bruno_env::init_tracing;
///
/// init_tracing("bruno_env=debug,warn");
/// ```
pub fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(build_filter(default_filter))
        .init();
}

/// Like [`init_tracing`], but leaves an existing subscriber in place.
///
/// Returns `true` if this call installed the subscriber.
pub fn try_init_tracing(default_filter: &str) -> bool {
    let result: Result<(), TryInitError> = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(build_filter(default_filter))
        .try_init();
    result.is_ok()
}
