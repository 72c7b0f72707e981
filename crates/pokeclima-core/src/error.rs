//! Shared error types for the PokeClima workspace.
//!
//! Service crates keep their own error enums; this module holds the
//! transport and configuration errors they have in common.

use thiserror::Error;

/// Top-level application error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Network-related errors (HTTP, connectivity).
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("HTTP client could not be built: {0}")]
    ClientBuild(String),
}

impl NetworkError {
    /// HTTP status, when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            NetworkError::ServerError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Extension trait for converting reqwest errors to our error types.
pub trait ReqwestErrorExt {
    fn into_network_error(self) -> NetworkError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_network_error(self) -> NetworkError {
        if self.is_timeout() {
            NetworkError::Timeout
        } else if self.is_builder() {
            NetworkError::ClientBuild(self.to_string())
        } else if self.is_decode() || self.is_body() {
            NetworkError::InvalidResponse(self.to_string())
        } else if let Some(status) = self.status() {
            NetworkError::ServerError {
                status: status.as_u16(),
                message: self.to_string(),
            }
        } else {
            NetworkError::ConnectionFailed(self.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_conversion() {
        let net_err = NetworkError::Timeout;
        let app_err: AppError = net_err.into();
        assert!(matches!(app_err, AppError::Network(NetworkError::Timeout)));
    }

    #[test]
    fn test_config_error_display() {
        let app_err: AppError = ConfigError::Invalid("weather.lang: empty".into()).into();
        assert!(app_err.to_string().contains("weather.lang"));
    }

    #[test]
    fn test_status_only_for_server_errors() {
        let err = NetworkError::ServerError {
            status: 404,
            message: "missing".into(),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(NetworkError::Timeout.status(), None);
        assert_eq!(NetworkError::ConnectionFailed("refused".into()).status(), None);
    }

    #[test]
    fn test_server_error_display_includes_status() {
        let err = NetworkError::ServerError {
            status: 401,
            message: "Invalid API key".into(),
        };
        assert!(err.to_string().contains("401"));
    }
}
