//! Authentication request construction
//!
//! The checkid request is the message a relying party redirects the user
//! to their provider with. Which keys it carries depends on the protocol
//! generation, on whether the endpoint is a provider identifier, and on
//! whether the relying party asked for an identifier-less request; the
//! rules are enforced here so callers cannot emit an ill-formed request.

use openid_core::{Message, IDENTIFIER_SELECT};
use tracing::debug;

use crate::endpoint::{Association, Endpoint};
use crate::error::{ConsumerError, Result};
use crate::extension::Extension;

/// Mode for a request the provider may satisfy by interacting with the user
const MODE_SETUP: &str = "checkid_setup";

/// Mode for a request the provider must answer without interaction
const MODE_IMMEDIATE: &str = "checkid_immediate";

/// Builder for a single checkid authentication request.
///
/// Holds the discovered endpoint, the optional association, the anonymity
/// flag, and any extension arguments. [`build_message`](Self::build_message)
/// assembles the wire message and may be called repeatedly; the builder is
/// not consumed and no fields leak between calls.
pub struct AuthRequest<'a> {
    endpoint: &'a dyn Endpoint,
    assoc: Option<&'a dyn Association>,
    anonymous: bool,
    /// Extension-argument bag, protocol namespace pre-registered
    message: Message,
}

impl<'a> AuthRequest<'a> {
    /// Create a request for an endpoint, optionally bound to an
    /// association.
    ///
    /// Fails when the endpoint's preferred namespace is not an OpenID
    /// protocol namespace.
    pub fn new(
        endpoint: &'a dyn Endpoint,
        assoc: Option<&'a dyn Association>,
    ) -> Result<Self> {
        let message = Message::with_namespace(endpoint.preferred_namespace())?;
        Ok(Self {
            endpoint,
            assoc,
            anonymous: false,
            message,
        })
    }

    /// Request that no identifier be sent.
    ///
    /// Identifier-less requests exist only in OpenID 2; asking for one
    /// against an OpenID 1 endpoint fails. Clearing the flag always
    /// succeeds.
    pub fn set_anonymous(&mut self, anonymous: bool) -> Result<()> {
        if anonymous && self.message.is_openid1() {
            return Err(ConsumerError::AnonymousNotSupported);
        }
        self.anonymous = anonymous;
        Ok(())
    }

    /// Whether the built request will omit identifiers
    pub fn is_anonymous(&self) -> bool {
        self.anonymous
    }

    /// The endpoint this request targets
    pub fn endpoint(&self) -> &dyn Endpoint {
        self.endpoint
    }

    /// Add a single extension argument.
    ///
    /// Arguments under one namespace are grouped; the namespace receives
    /// its wire alias the first time it appears here.
    pub fn add_extension_arg(&mut self, namespace: &str, key: &str, value: &str) {
        self.message.set_arg(namespace, key, value);
    }

    /// Merge a whole extension's argument set into the request
    pub fn add_extension(&mut self, extension: &dyn Extension) {
        for (key, value) in extension.extension_args() {
            self.message.set_arg(extension.namespace_uri(), &key, &value);
        }
    }

    /// Extension arguments accumulated so far, as a message
    pub fn message(&self) -> &Message {
        &self.message
    }

    /// Assemble the checkid message.
    ///
    /// Builds on a copy of the extension bag, so the request can be
    /// rebuilt after further configuration and earlier results are never
    /// mutated. Field naming follows the message's protocol generation:
    /// the realm travels as `realm` in OpenID 2 and `trust_root` in
    /// OpenID 1, and `claimed_id` is OpenID 2 vocabulary only. An
    /// anonymous request carries no identifiers at all; a provider
    /// identifier endpoint carries the identifier-select sentinel.
    pub fn build_message(&self, realm: &str, return_to: &str, immediate: bool) -> Message {
        let mut message = self.message.clone();
        let ns = message.protocol_namespace().to_string();
        let version = message.version();

        let mode = if immediate { MODE_IMMEDIATE } else { MODE_SETUP };
        message.set_arg(&ns, "mode", mode);
        message.set_arg(&ns, "return_to", return_to);
        message.set_arg(&ns, version.realm_key(), realm);

        if !self.anonymous {
            if self.endpoint.is_op_identifier() {
                message.set_arg(&ns, "identity", IDENTIFIER_SELECT);
                if version.sends_claimed_id() {
                    message.set_arg(&ns, "claimed_id", IDENTIFIER_SELECT);
                }
            } else {
                message.set_arg(&ns, "identity", self.endpoint.local_id());
                if version.sends_claimed_id() {
                    message.set_arg(&ns, "claimed_id", self.endpoint.claimed_id());
                }
            }
        }

        if let Some(assoc) = self.assoc {
            message.set_arg(&ns, "assoc_handle", assoc.handle());
        }

        debug!("built {} request for {}", mode, self.endpoint.server_url());

        message
    }
}
