//! OpenID Consumer
//!
//! Relying-party support for OpenID Authentication 1.x and 2.0: given an
//! endpoint produced by discovery and, optionally, an established
//! association, build the checkid request message that sends the user to
//! their provider.
//!
//! # Example
//!
//! ```ignore
//! use openid_consumer::AuthRequest;
//!
//! let mut request = AuthRequest::new(&endpoint, Some(&assoc))?;
//! request.add_extension_arg("http://openid.net/extensions/sreg/1.1", "optional", "email");
//!
//! let message = request.build_message(
//!     "https://shop.example/",
//!     "https://shop.example/account/verify",
//!     false,
//! );
//! let query = message.to_post_args();
//! ```

pub mod auth_request;
pub mod endpoint;
pub mod error;
pub mod extension;

pub use auth_request::AuthRequest;
pub use endpoint::{Association, Endpoint};
pub use error::{ConsumerError, Result};
pub use extension::Extension;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::auth_request::AuthRequest;
    pub use crate::endpoint::{Association, Endpoint};
    pub use crate::error::{ConsumerError, Result};
    pub use crate::extension::Extension;
    pub use openid_core::{
        Message, ProtocolVersion, IDENTIFIER_SELECT, OPENID1_NS, OPENID2_NS,
    };
}
