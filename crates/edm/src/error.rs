//! CLI error types.

use edm_config::ConfigError;
use edm_nav::NavError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("Invalid route catalog: {0}")]
    Catalog(#[from] NavError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Server(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_message() {
        let err = CliError::from(NavError::DuplicateLink("/docs/a".to_owned()));

        assert_eq!(
            err.to_string(),
            "Invalid route catalog: Duplicate route path in catalog: /docs/a"
        );
    }
}
