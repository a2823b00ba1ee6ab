//! Protocol generation rules
//!
//! The two OpenID generations share one message model but name several
//! request fields differently. Those rules live here as a table so call
//! sites stay free of version conditionals.

use serde::{Deserialize, Serialize};

use crate::{OPENID1_NS, OPENID1_NS_1_1, OPENID2_NS};

/// OpenID protocol generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProtocolVersion {
    /// OpenID 1.0 / 1.1
    V1,
    /// OpenID 2.0
    V2,
}

impl ProtocolVersion {
    /// Map a protocol namespace URI to its generation
    pub fn from_namespace(uri: &str) -> Option<Self> {
        match uri {
            OPENID1_NS | OPENID1_NS_1_1 => Some(ProtocolVersion::V1),
            OPENID2_NS => Some(ProtocolVersion::V2),
            _ => None,
        }
    }

    /// Key the relying-party realm is sent under
    pub fn realm_key(self) -> &'static str {
        match self {
            ProtocolVersion::V1 => "trust_root",
            ProtocolVersion::V2 => "realm",
        }
    }

    /// Whether requests carry the user-facing `claimed_id` field
    pub fn sends_claimed_id(self) -> bool {
        match self {
            ProtocolVersion::V1 => false,
            ProtocolVersion::V2 => true,
        }
    }
}

impl std::fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProtocolVersion::V1 => write!(f, "OpenID 1"),
            ProtocolVersion::V2 => write!(f, "OpenID 2"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_namespace() {
        assert_eq!(
            ProtocolVersion::from_namespace(OPENID1_NS),
            Some(ProtocolVersion::V1)
        );
        assert_eq!(
            ProtocolVersion::from_namespace(OPENID1_NS_1_1),
            Some(ProtocolVersion::V1)
        );
        assert_eq!(
            ProtocolVersion::from_namespace(OPENID2_NS),
            Some(ProtocolVersion::V2)
        );
        assert_eq!(ProtocolVersion::from_namespace("http://example/"), None);
    }

    #[test]
    fn test_field_table() {
        assert_eq!(ProtocolVersion::V1.realm_key(), "trust_root");
        assert_eq!(ProtocolVersion::V2.realm_key(), "realm");
        assert!(!ProtocolVersion::V1.sends_claimed_id());
        assert!(ProtocolVersion::V2.sends_claimed_id());
    }
}
