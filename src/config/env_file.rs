//! Bruno environment file generation.

use super::environment::Environment;
use crate::error::UnknownEnvironment;

/// Generate the Bruno environment file body for a named environment.
///
/// The token variables are left blank for the login request to fill in, and
/// the secret section is empty.
///
/// # Example
///
/// ```rust
/// use bruno_env::generate;
///
/// let block = generate("development").unwrap();
/// assert!(block.contains("baseUrl: http://localhost:8000"));
/// assert!(generate("unknown").is_err());
/// ```
pub fn generate(env_name: &str) -> Result<String, UnknownEnvironment> {
    let env = env_name.parse::<Environment>().map_err(|err| {
        tracing::warn!(environment = env_name, "refusing to generate env file");
        err
    })?;
    Ok(render_env_file(env))
}

/// Render the environment file body for a known environment.
pub fn render_env_file(env: Environment) -> String {
    let profile = env.profile();
    tracing::debug!(environment = %env, base_url = profile.base_url, "rendering env file");

    format!(
        "vars {{\n  baseUrl: {}\n  apiPath: {}\n  accessToken: \n  refreshToken: \n}}\n\nvars:secret [\n  \n]",
        profile.base_url, profile.api_path
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trailing spaces after the token keys and inside the secret list are significant.
    const DEVELOPMENT_BLOCK: &str = concat!(
        "vars {\n",
        "  baseUrl: http://localhost:8000\n",
        "  apiPath: /api\n",
        "  accessToken: \n",
        "  refreshToken: \n",
        "}\n",
        "\n",
        "vars:secret [\n",
        "  \n",
        "]",
    );

    #[test]
    fn development_block_is_exact() {
        assert_eq!(generate("development").unwrap(), DEVELOPMENT_BLOCK);
    }

    #[test]
    fn staging_differs_only_in_base_url() {
        let staging = generate("staging").unwrap();
        assert!(staging.contains("  baseUrl: https://staging-api.fliply.com\n"));
        assert_eq!(
            staging.replace("https://staging-api.fliply.com", "http://localhost:8000"),
            DEVELOPMENT_BLOCK
        );
    }

    #[test]
    fn every_environment_carries_its_profile() {
        for env in Environment::ALL {
            let block = render_env_file(env);
            let profile = env.profile();
            assert!(block.contains(&format!("baseUrl: {}", profile.base_url)));
            assert!(block.contains(&format!("apiPath: {}", profile.api_path)));
            assert!(block.contains("accessToken: \n"));
            assert!(block.contains("refreshToken: \n"));
            assert!(block.ends_with("vars:secret [\n  \n]"));
        }
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(generate("production"), generate("production"));
        assert_eq!(
            generate("staging").unwrap(),
            render_env_file(Environment::Staging)
        );
    }

    #[test]
    fn unknown_environment_is_an_error() {
        let err = generate("unknown").unwrap_err();
        assert_eq!(err.name(), "unknown");
        assert!(generate("Production").is_err());
    }
}
