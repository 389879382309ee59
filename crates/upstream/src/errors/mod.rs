//! Error types for upstream provider calls.
//!
//! [`UpstreamError`] describes a failure of the outbound call itself. An
//! upstream that answered successfully but with no usable data is not an
//! error at this layer; that distinction is made by the caller.

use thiserror::Error;

/// Errors that can occur while calling an upstream provider.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The request could not be sent or the response could not be read.
    #[error("Request failed: {provider} - {message}")]
    Request {
        /// The provider being called
        provider: String,
        /// Transport-level error message
        message: String,
    },

    /// The provider answered with a non-success HTTP status.
    #[error("HTTP {status} from {provider}: {body}")]
    Status {
        /// The provider that returned the status
        provider: String,
        /// HTTP status code
        status: u16,
        /// Raw response body, kept for server-side logging only
        body: String,
    },

    /// The provider answered with a body that is not the expected JSON.
    #[error("Failed to decode {provider} response: {message}")]
    Decode {
        /// The provider whose body failed to decode
        provider: String,
        /// Parser error message
        message: String,
    },

    /// The shared HTTP client could not be built.
    #[error("HTTP client setup failed: {0}")]
    ClientSetup(#[from] reqwest::Error),
}

impl UpstreamError {
    /// HTTP status reported by the provider, if the call got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn from_send(provider: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                provider: provider.to_string(),
            }
        } else {
            Self::Request {
                provider: provider.to_string(),
                message: err.to_string(),
            }
        }
    }

    pub(crate) fn decode(provider: &str, err: serde_json::Error) -> Self {
        Self::Decode {
            provider: provider.to_string(),
            message: err.to_string(),
        }
    }
}
