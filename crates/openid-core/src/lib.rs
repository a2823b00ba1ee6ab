//! OpenID Core
//!
//! Message model and wire encodings for OpenID Authentication 1.x and 2.0.
//!
//! This crate provides:
//! - The namespaced key/value message model ([`Message`])
//! - Extension namespace aliasing ([`NamespaceMap`])
//! - Protocol generation rules ([`ProtocolVersion`])
//! - The flat `openid.*` transport encoding ([`Message::to_post_args`])
//! - The line-oriented KV-form encoding ([`kvform`])

pub mod error;
pub mod kvform;
pub mod message;
pub mod namespace;
pub mod version;

pub use error::{Error, Result};
pub use message::Message;
pub use namespace::NamespaceMap;
pub use version::ProtocolVersion;

/// Namespace URI for OpenID 1.0 messages
pub const OPENID1_NS: &str = "http://openid.net/signon/1.0";

/// Namespace URI for OpenID 1.1 messages
pub const OPENID1_NS_1_1: &str = "http://openid.net/signon/1.1";

/// Namespace URI for OpenID 2.0 messages
pub const OPENID2_NS: &str = "http://specs.openid.net/auth/2.0";

/// Identity value asking the provider to choose the identifier itself
pub const IDENTIFIER_SELECT: &str = "http://specs.openid.net/auth/2.0/identifier_select";

/// Prefix applied to every key in the transport encoding
pub const OPENID_PREFIX: &str = "openid.";
