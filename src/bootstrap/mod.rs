//! Logging bootstrap.

mod tracing_init;

pub use tracing_init::{init_tracing, try_init_tracing, DEFAULT_FILTER};
