//! Consumer error types

use thiserror::Error;

/// Result type alias for consumer operations
pub type Result<T> = std::result::Result<T, ConsumerError>;

/// Errors raised while configuring or building a request
#[derive(Error, Debug)]
pub enum ConsumerError {
    /// OpenID 1 has no identifier-less request form
    #[error("OpenID 1 requests must include an identifier")]
    AnonymousNotSupported,

    /// Error from the message model
    #[error("protocol error: {0}")]
    Protocol(#[from] openid_core::Error),
}
