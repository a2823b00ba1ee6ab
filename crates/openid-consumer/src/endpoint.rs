//! Discovery and association seams
//!
//! Requests are built against data produced by the discovery and
//! association subsystems. Those subsystems stay behind narrow read-only
//! traits so any representation, including a test double, plugs in
//! without an inheritance relationship.

/// A provider endpoint produced by discovery
pub trait Endpoint {
    /// Protocol namespace the provider prefers to speak
    fn preferred_namespace(&self) -> &str;

    /// Provider-local identifier for the user
    fn local_id(&self) -> &str;

    /// Identifier the user claims publicly
    fn claimed_id(&self) -> &str;

    /// URL requests to this provider are sent to
    fn server_url(&self) -> &str;

    /// Whether this endpoint identifies the provider itself, leaving the
    /// choice of user identifier to the provider
    fn is_op_identifier(&self) -> bool;
}

/// A previously negotiated association with a provider
pub trait Association {
    /// Opaque handle naming the shared secret
    fn handle(&self) -> &str;
}
