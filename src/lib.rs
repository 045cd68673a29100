//! Bruno env - setup helpers for the Fliply Bruno API collection.
//!
//! This crate provides the pieces behind the collection's environment setup:
//!
//! - **config**: Environment profiles, test credentials, and env-file generation
//! - **fixtures**: Sample request payloads (addresses, cards, listings)
//! - **setup**: Setup overview and per-environment instructions
//! - **bootstrap**: Tracing initialization utilities
//!
//! # Features
//!
//! - `config` - Environment tables and env-file generation (enabled by default)
//! - `fixtures` - Sample payloads with JSON serialization (enabled by default)
//! - `setup` - Setup instruction rendering, implies `config` (enabled by default)
//! - `bootstrap` - Tracing setup (enabled by default)
//! - `full` - All features
//!
//! # Example
//!
//! ```rust
//! use bruno_env::{generate, Environment};
//!
//! let block = generate("staging").unwrap();
//! assert!(block.contains("baseUrl: https://staging-api.fliply.com"));
//! assert!(Environment::Production.credentials().is_none());
//! ```

pub mod error;

#[cfg(feature = "config")]
pub mod config;

#[cfg(feature = "fixtures")]
pub mod fixtures;

#[cfg(feature = "setup")]
pub mod setup;

#[cfg(feature = "bootstrap")]
pub mod bootstrap;

// Re-exports for convenience
pub use error::UnknownEnvironment;

#[cfg(feature = "config")]
pub use config::{
    generate, render_env_file, Credential, Environment, EnvironmentProfile, Role, RoleCredentials,
};

#[cfg(feature = "fixtures")]
pub use fixtures::{sample_data, SampleData};

#[cfg(feature = "bootstrap")]
pub use bootstrap::{init_tracing, try_init_tracing};
