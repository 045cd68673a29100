//! Error types.

use thiserror::Error;

/// Returned when an environment name is not one of the known keys.
///
/// Matching is exact and case-sensitive, so `"Development"` is rejected the
/// same way as `"unknown"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown environment: {name}")]
pub struct UnknownEnvironment {
    name: String,
}

impl UnknownEnvironment {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The rejected environment name, as given.
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_rejected_name() {
        let err = UnknownEnvironment::new("qa");
        assert_eq!(err.to_string(), "unknown environment: qa");
        assert_eq!(err.name(), "qa");
    }
}
