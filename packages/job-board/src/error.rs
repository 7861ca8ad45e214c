//! Error types for the jobs API.

use thiserror::Error;

/// Result type for jobs API operations.
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Jobs API errors.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Configuration error (invalid base URL, client build failure)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// API error (non-2xx response)
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Parse error (invalid JSON, unknown status column)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ServiceError {
    /// HTTP status code, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ServiceError::Api { status, .. } => Some(*status),
            ServiceError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_status_and_body() {
        let err = ServiceError::Api {
            status: 503,
            message: "unavailable".into(),
        };
        assert_eq!(err.to_string(), "API error (503): unavailable");
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn parse_error_has_no_status() {
        let err = ServiceError::Parse("bad json".into());
        assert_eq!(err.status(), None);
    }
}
