//! The OpenID message model
//!
//! A [`Message`] is a set of `(namespace, key) -> value` arguments plus the
//! registry of extension namespace aliases used to flatten it into the
//! `openid.*` transport encoding. One namespace — the protocol namespace —
//! is emitted without an alias, and which URI holds that position decides
//! the protocol generation: a message that never registered one is an
//! OpenID 1 message.

use indexmap::IndexMap;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::error::{Error, Result};
use crate::kvform;
use crate::namespace::{NamespaceMap, NS_KEY};
use crate::version::ProtocolVersion;
use crate::{OPENID1_NS, OPENID_PREFIX};

/// A protocol message of either OpenID generation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Message {
    /// Explicitly registered protocol namespace; `None` is implicit OpenID 1
    protocol_ns: Option<String>,
    extensions: NamespaceMap,
    /// namespace URI -> key -> value, insertion-ordered at both levels
    args: IndexMap<String, IndexMap<String, String>>,
}

impl Message {
    /// Create an empty message (implicit OpenID 1)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a message with its protocol namespace registered
    pub fn with_namespace(uri: &str) -> Result<Self> {
        let mut message = Message::new();
        message.set_protocol_namespace(uri)?;
        Ok(message)
    }

    /// Register the protocol namespace.
    ///
    /// Registering the same URI again is a no-op. Registering a second,
    /// different URI fails, as does any URI that is not an OpenID protocol
    /// namespace or that is already registered as an extension.
    pub fn set_protocol_namespace(&mut self, uri: &str) -> Result<()> {
        if ProtocolVersion::from_namespace(uri).is_none() {
            return Err(Error::InvalidNamespace(uri.to_string()));
        }
        if let Some(current) = &self.protocol_ns {
            if current == uri {
                return Ok(());
            }
            return Err(Error::NamespaceConflict {
                current: current.clone(),
                requested: uri.to_string(),
            });
        }
        if self.extensions.contains(uri) {
            return Err(Error::InvalidNamespace(format!(
                "{} is already an extension namespace",
                uri
            )));
        }
        self.protocol_ns = Some(uri.to_string());
        Ok(())
    }

    /// The protocol namespace, [`OPENID1_NS`] when none was registered
    pub fn protocol_namespace(&self) -> &str {
        self.protocol_ns.as_deref().unwrap_or(OPENID1_NS)
    }

    /// Protocol generation this message belongs to
    pub fn version(&self) -> ProtocolVersion {
        ProtocolVersion::from_namespace(self.protocol_namespace())
            .unwrap_or(ProtocolVersion::V1)
    }

    /// Check for an OpenID 1.x message
    pub fn is_openid1(&self) -> bool {
        self.version() == ProtocolVersion::V1
    }

    /// Check for an OpenID 2.0 message
    pub fn is_openid2(&self) -> bool {
        self.version() == ProtocolVersion::V2
    }

    /// Extension namespaces registered on this message
    pub fn namespaces(&self) -> &NamespaceMap {
        &self.extensions
    }

    fn is_protocol_ns(&self, uri: &str) -> bool {
        uri == self.protocol_namespace()
    }

    /// Set an argument, overwriting any previous value for the pair.
    ///
    /// An unknown extension namespace is registered and assigned the next
    /// numeric alias.
    pub fn set_arg(&mut self, namespace: &str, key: &str, value: &str) {
        if !self.is_protocol_ns(namespace) {
            self.extensions.add(namespace);
        }
        self.args
            .entry(namespace.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    /// Look up an argument
    pub fn get_arg(&self, namespace: &str, key: &str) -> Option<&str> {
        self.args
            .get(namespace)
            .and_then(|ns_args| ns_args.get(key))
            .map(String::as_str)
    }

    /// All arguments under one namespace, in insertion order
    pub fn get_args(&self, namespace: &str) -> IndexMap<String, String> {
        self.args.get(namespace).cloned().unwrap_or_default()
    }

    /// Remove an argument, returning its value
    pub fn del_arg(&mut self, namespace: &str, key: &str) -> Option<String> {
        self.args
            .get_mut(namespace)
            .and_then(|ns_args| ns_args.shift_remove(key))
    }

    /// Transport key an argument of this namespace is emitted under.
    ///
    /// `None` for an extension namespace that was never registered.
    pub fn get_key(&self, namespace: &str, key: &str) -> Option<String> {
        if self.is_protocol_ns(namespace) {
            return Some(format!("{}{}", OPENID_PREFIX, key));
        }
        self.extensions
            .alias_for(namespace)
            .map(|alias| format!("{}{}.{}", OPENID_PREFIX, alias, key))
    }

    /// Flatten into the `openid.*` transport encoding.
    ///
    /// Emission order is stable for a given registration history: the
    /// protocol namespace first, then extension namespaces in
    /// first-registration order. The protocol namespace declaration
    /// (`openid.ns`) is only emitted when it was explicitly registered;
    /// extension declarations (`openid.ns.<alias>`) are always emitted,
    /// with or without arguments under them.
    pub fn to_post_args(&self) -> IndexMap<String, String> {
        let mut post = IndexMap::new();

        if let Some(uri) = &self.protocol_ns {
            post.insert(format!("{}{}", OPENID_PREFIX, NS_KEY), uri.clone());
        }
        if let Some(ns_args) = self.args.get(self.protocol_namespace()) {
            for (key, value) in ns_args {
                post.insert(format!("{}{}", OPENID_PREFIX, key), value.clone());
            }
        }

        for (uri, alias) in self.extensions.iter() {
            post.insert(
                format!("{}{}.{}", OPENID_PREFIX, NS_KEY, alias),
                uri.to_string(),
            );
            if let Some(ns_args) = self.args.get(uri) {
                for (key, value) in ns_args {
                    post.insert(
                        format!("{}{}.{}", OPENID_PREFIX, alias, key),
                        value.clone(),
                    );
                }
            }
        }

        post
    }

    /// Reconstruct a message from its transport encoding.
    ///
    /// Namespace declarations fix the aliases, so parse-then-emit is
    /// stable. Arguments under an alias that was never declared fall back
    /// to a dotted key in the protocol namespace. Keys without the
    /// `openid.` prefix are transport noise and ignored.
    pub fn from_post_args<'a, I>(post_args: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut message = Message::new();
        let mut rest: Vec<(String, String)> = Vec::new();

        // Declarations first: they fix the protocol namespace and the
        // extension aliases the remaining keys are resolved against.
        for (key, value) in post_args {
            let Some(field) = key.strip_prefix(OPENID_PREFIX) else {
                continue;
            };
            match field.split_once('.') {
                None if field == NS_KEY => message.set_protocol_namespace(value)?,
                Some((NS_KEY, alias)) => message.extensions.add_alias(value, alias)?,
                _ => rest.push((field.to_string(), value.to_string())),
            }
        }

        for (field, value) in &rest {
            match field.split_once('.') {
                Some((alias, key)) => {
                    if let Some(uri) = message.extensions.uri_for(alias).map(str::to_string) {
                        message.set_arg(&uri, key, value);
                    } else {
                        // Undeclared alias: the whole field is a
                        // protocol-namespace key.
                        let ns = message.protocol_namespace().to_string();
                        message.set_arg(&ns, field, value);
                    }
                }
                None => {
                    let ns = message.protocol_namespace().to_string();
                    message.set_arg(&ns, field, value);
                }
            }
        }

        Ok(message)
    }

    /// The transport encoding without the `openid.` prefix.
    ///
    /// This is the form the KV-form encoding is built from.
    pub fn to_args(&self) -> IndexMap<String, String> {
        self.to_post_args()
            .into_iter()
            .map(|(key, value)| {
                let key = key.strip_prefix(OPENID_PREFIX).unwrap_or(key.as_str()).to_string();
                (key, value)
            })
            .collect()
    }

    /// Encode as KV-form, the line-oriented encoding used for direct
    /// provider responses and association material
    pub fn to_kvform(&self) -> String {
        let args = self.to_args();
        kvform::to_kv(args.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }
}

// The serialized form of a message is its transport encoding, so a message
// stored as JSON reads back through the same path as one taken off the wire.
impl Serialize for Message {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.to_post_args())
    }
}

impl<'de> Deserialize<'de> for Message {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let post_args = IndexMap::<String, String>::deserialize(deserializer)?;
        Message::from_post_args(post_args.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .map_err(serde::de::Error::custom)
    }
}
