//! Error types for the marketplace client.

use thiserror::Error;

/// Everything that can go wrong between a form and the API.
///
/// The variants map onto the three failure kinds the pages distinguish:
/// authentication ([`ApiError::Unauthenticated`], resolved by redirecting to
/// the entry page), application-level ([`ApiError::Server`] and
/// [`ApiError::Invalid`], shown inline) and transport
/// ([`ApiError::Network`], shown inline with its own label).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// No token is stored, or the server rejected the one we sent.
    #[error("Authentication required")]
    Unauthenticated,

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The request never got a response.
    #[error("Network error: {0}")]
    Network(String),

    /// A 2xx response whose body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Local validation failed; no request was sent.
    #[error("{0}")]
    Invalid(String),
}

impl ApiError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ApiError::Invalid(message.into())
    }

    /// HTTP status of a server-reported error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(403)
    }

    /// Whether the page should drop the user back to the entry page.
    pub fn requires_sign_in(&self) -> bool {
        matches!(self, ApiError::Unauthenticated)
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_errors_are_labelled() {
        let err = ApiError::Network("connection refused".into());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn test_server_errors_show_the_message_only() {
        let err = ApiError::Server {
            status: 400,
            message: "Email already registered".into(),
        };
        assert_eq!(err.to_string(), "Email already registered");
        assert_eq!(err.status(), Some(400));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_only_unauthenticated_requires_sign_in() {
        assert!(ApiError::Unauthenticated.requires_sign_in());
        assert!(!ApiError::invalid("x").requires_sign_in());
        assert!(!ApiError::Server { status: 403, message: String::new() }.requires_sign_in());
    }
}
