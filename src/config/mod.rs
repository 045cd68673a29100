//! Static environment configuration and env-file generation.

mod credentials;
mod env_file;
mod environment;

pub use credentials::{Credential, Role, RoleCredentials};
pub use env_file::{generate, render_env_file};
pub use environment::{Environment, EnvironmentProfile};
