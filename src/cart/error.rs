//! Shopping Cart Errors

use thiserror::Error;

/// Failure reported by a [`CartGateway`](super::gateway::CartGateway).
///
/// The boundary carries a human-readable message only.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct GatewayError {
    pub message: String,
}

impl GatewayError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors returned by cart commands
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CartError {
    /// Rejected locally; the gateway was never called
    #[error("invalid cart command: {0}")]
    Validation(String),

    /// The gateway call failed
    #[error("{0}")]
    Gateway(String),
}

impl From<GatewayError> for CartError {
    fn from(err: GatewayError) -> Self {
        CartError::Gateway(err.message)
    }
}
