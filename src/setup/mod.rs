//! Setup instructions for the Bruno collection.
//!
//! The renderers return plain text so callers decide where it goes; the
//! `print_*` helpers write it to stdout.

use crate::config::{Environment, Role};
use crate::error::UnknownEnvironment;
use std::fmt::Write;

const SETUP_STEPS: [&str; 5] = [
    "Open Bruno and import the bruno-collection folder",
    "Select \"{env}\" environment from the dropdown",
    "Verify environment variables are set correctly",
    "Run Authentication > Login to get access token",
    "Start testing endpoints!",
];

const PRODUCTION_WARNINGS: [&str; 3] = [
    "Use real credentials (not test accounts)",
    "Be careful with data modifications",
    "Consider using staging for testing first",
];

/// Render the setup instructions for one environment.
///
/// Production output omits credentials and ends with a warning.
///
/// # Example
///
/// ```rust
/// use bruno_env::{setup::setup_instructions, Environment};
///
/// let text = setup_instructions(Environment::Development);
/// assert!(text.contains("=== DEVELOPMENT ENVIRONMENT SETUP ==="));
/// assert!(text.contains("Buyer: buyer@test.com / TestPassword123!"));
/// ```
pub fn setup_instructions(env: Environment) -> String {
    let profile = env.profile();
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "\n=== {} ENVIRONMENT SETUP ===", env.as_str().to_uppercase());
    let _ = writeln!(out, "Description: {}", profile.description);
    let _ = writeln!(out, "Base URL: {}", profile.base_url);
    let _ = writeln!(out, "API Path: {}", profile.api_path);

    if let Some(creds) = env.credentials() {
        out.push_str("\n--- Test Credentials ---\n");
        for role in Role::ALL {
            let cred = creds.get(role);
            let _ = writeln!(out, "{}: {} / {}", role.label(), cred.email, cred.password);
        }
    }

    out.push_str("\n--- Setup Steps ---\n");
    for (index, step) in SETUP_STEPS.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", index + 1, step.replace("{env}", env.as_str()));
    }

    if env.is_production() {
        out.push_str("\n⚠️  WARNING: You are setting up PRODUCTION environment!\n");
        for warning in PRODUCTION_WARNINGS {
            let _ = writeln!(out, "   - {warning}");
        }
    }

    out
}

/// String-keyed variant of [`setup_instructions`].
pub fn instructions_for(env_name: &str) -> Result<String, UnknownEnvironment> {
    let env = env_name.parse::<Environment>()?;
    Ok(setup_instructions(env))
}

/// Render the overview listing every environment and the available helpers.
pub fn setup_overview() -> String {
    let mut out = String::from("🚀 Bruno API Collection Setup\n\n");

    out.push_str("Available environments:\n");
    for (index, env) in Environment::ALL.iter().enumerate() {
        let _ = writeln!(out, "{}. {} - {}", index + 1, env, env.profile().description);
    }

    out.push_str("\nTo setup a specific environment, run:\n");
    for env in Environment::ALL {
        let _ = writeln!(out, "setup_instructions(Environment::{env:?})");
    }

    out.push_str("\nTo generate Bruno environment file:\n");
    out.push_str("generate(\"development\")\n");

    out
}

pub fn print_setup_overview() {
    print!("{}", setup_overview());
}

pub fn print_setup_instructions(env: Environment) {
    tracing::debug!(environment = %env, "printing setup instructions");
    print!("{}", setup_instructions(env));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_lists_every_test_account() {
        let text = setup_instructions(Environment::Development);
        assert!(text.starts_with("\n=== DEVELOPMENT ENVIRONMENT SETUP ===\n"));
        assert!(text.contains("Description: Local development server\n"));
        assert!(text.contains("Base URL: http://localhost:8000\n"));
        assert!(text.contains("API Path: /api\n"));
        assert!(text.contains("\n--- Test Credentials ---\n"));
        assert!(text.contains("Buyer: buyer@test.com / TestPassword123!\n"));
        assert!(text.contains("Seller: seller@test.com / TestPassword123!\n"));
        assert!(text.contains("Admin: admin@test.com / AdminPassword123!\n"));
        assert!(!text.contains("WARNING"));
    }

    #[test]
    fn steps_name_the_selected_environment() {
        let text = setup_instructions(Environment::Staging);
        assert!(text.contains("1. Open Bruno and import the bruno-collection folder\n"));
        assert!(text.contains("2. Select \"staging\" environment from the dropdown\n"));
        assert!(text.ends_with("5. Start testing endpoints!\n"));
    }

    #[test]
    fn production_warns_and_hides_credentials() {
        let text = setup_instructions(Environment::Production);
        assert!(!text.contains("--- Test Credentials ---"));
        assert!(text.contains("⚠️  WARNING: You are setting up PRODUCTION environment!\n"));
        assert!(text.contains("   - Use real credentials (not test accounts)\n"));
        assert!(text.ends_with("   - Consider using staging for testing first\n"));
    }

    #[test]
    fn instructions_for_rejects_unknown_names() {
        assert!(instructions_for("staging").is_ok());
        let err = instructions_for("qa").unwrap_err();
        assert_eq!(err.name(), "qa");
    }

    #[test]
    fn overview_numbers_environments_in_order() {
        let text = setup_overview();
        assert!(text.starts_with("🚀 Bruno API Collection Setup\n"));
        assert!(text.contains("1. development - Local development server\n"));
        assert!(text.contains("2. staging - Staging environment for testing\n"));
        assert!(text.contains("3. production - Production environment - use with caution\n"));
        assert!(text.contains("setup_instructions(Environment::Production)\n"));
    }
}
