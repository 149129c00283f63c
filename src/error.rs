use thiserror::Error;

/// Application-level errors using thiserror for structured error handling.
///
/// These errors represent domain-specific failures that can occur during
/// application operation. They provide context and can be chained with anyhow.

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Invalid field rule pattern: {pattern}")]
    BadPattern {
        pattern: &'static str,
        #[source]
        source: regex::Error,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from {path}")]
    LoadFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to save configuration to {path}")]
    SaveFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to create config directory: {path}")]
    DirectoryCreationFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not determine the platform config directory")]
    NoConfigDir,
}

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Request to prediction endpoint failed")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Prediction endpoint returned status {0}")]
    BadStatus(u16),

    #[error("Failed to parse prediction response")]
    MalformedResponse(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Type alias for application Results using anyhow for context chaining
pub type AppResult<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = SubmitError::BadStatus(503);
        assert_eq!(err.to_string(), "Prediction endpoint returned status 503");

        let err = ConfigError::NoConfigDir;
        assert_eq!(
            err.to_string(),
            "Could not determine the platform config directory"
        );
    }

    #[test]
    fn test_error_source_chain() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let config_err = ConfigError::LoadFailed {
            path: "/test/config.json".to_string(),
            source: Box::new(io_err),
        };

        assert!(config_err.source().is_some());
        assert_eq!(
            config_err.to_string(),
            "Failed to load configuration from /test/config.json"
        );
    }

    #[test]
    fn test_bad_pattern_carries_source() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = RegistryError::BadPattern {
            pattern: "(",
            source,
        };

        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "Invalid field rule pattern: (");
    }
}
