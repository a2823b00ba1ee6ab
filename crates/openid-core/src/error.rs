//! Error types for the OpenID message model

use thiserror::Error;

/// Result type alias for message operations
pub type Result<T> = std::result::Result<T, Error>;

/// OpenID message errors
#[derive(Error, Debug)]
pub enum Error {
    /// URI is not usable as a protocol namespace
    #[error("invalid OpenID namespace: {0}")]
    InvalidNamespace(String),

    /// A different protocol namespace is already registered
    #[error("protocol namespace is {current}, refusing {requested}")]
    NamespaceConflict { current: String, requested: String },

    /// Extension namespace alias is malformed or already bound
    #[error("invalid namespace alias: {0}")]
    InvalidAlias(String),
}
