//! Deployment environments and their connection profiles.

use crate::error::UnknownEnvironment;
use std::fmt;
use std::str::FromStr;

/// Connection settings for one deployment environment.
///
/// | Environment | Base URL | API path |
/// |-------------|----------|----------|
/// | `development` | `http://localhost:8000` | `/api` |
/// | `staging` | `https://staging-api.fliply.com` | `/api` |
/// | `production` | `https://api.fliply.com` | `/api` |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnvironmentProfile {
    /// Scheme and host of the API server
    pub base_url: &'static str,
    /// Path prefix of the versioned API routes
    pub api_path: &'static str,
    /// Human-readable summary shown in the setup overview
    pub description: &'static str,
}

static DEVELOPMENT: EnvironmentProfile = EnvironmentProfile {
    base_url: "http://localhost:8000",
    api_path: "/api",
    description: "Local development server",
};

static STAGING: EnvironmentProfile = EnvironmentProfile {
    base_url: "https://staging-api.fliply.com",
    api_path: "/api",
    description: "Staging environment for testing",
};

static PRODUCTION: EnvironmentProfile = EnvironmentProfile {
    base_url: "https://api.fliply.com",
    api_path: "/api",
    description: "Production environment - use with caution",
};

/// A named deployment target.
///
/// # Example
///
/// ```rust
/// use bruno_env::Environment;
///
/// let env: Environment = "staging".parse().unwrap();
/// assert_eq!(env.profile().base_url, "https://staging-api.fliply.com");
/// assert!("Staging".parse::<Environment>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Every environment, in the order they are listed to users.
    pub const ALL: [Environment; 3] = [
        Environment::Development,
        Environment::Staging,
        Environment::Production,
    ];

    /// The lowercase key used by the Bruno collection.
    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    pub fn profile(self) -> &'static EnvironmentProfile {
        match self {
            Environment::Development => &DEVELOPMENT,
            Environment::Staging => &STAGING,
            Environment::Production => &PRODUCTION,
        }
    }

    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = UnknownEnvironment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Environment::ALL
            .into_iter()
            .find(|env| env.as_str() == s)
            .ok_or_else(|| UnknownEnvironment::new(s))
    }
}
