//! Extension namespace aliasing
//!
//! Every extension namespace in a message is referred to on the wire by a
//! short alias. Aliases are assigned `"0"`, `"1"`, `"2"`, ... in first-use
//! order, and that order is observable in the transport encoding, so the
//! registry is insertion-ordered.

use indexmap::IndexMap;

use crate::error::{Error, Result};

/// Alias reserved for namespace declarations themselves
pub(crate) const NS_KEY: &str = "ns";

/// Insertion-ordered registry of extension namespace aliases
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceMap {
    /// namespace URI -> alias, in first-registration order
    aliases: IndexMap<String, String>,
    next_alias: u32,
}

impl NamespaceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Alias assigned to a namespace, if registered
    pub fn alias_for(&self, uri: &str) -> Option<&str> {
        self.aliases.get(uri).map(String::as_str)
    }

    /// Namespace registered under an alias, if any
    pub fn uri_for(&self, alias: &str) -> Option<&str> {
        self.aliases
            .iter()
            .find(|(_, a)| a.as_str() == alias)
            .map(|(uri, _)| uri.as_str())
    }

    /// Check whether a namespace is registered
    pub fn contains(&self, uri: &str) -> bool {
        self.aliases.contains_key(uri)
    }

    /// Register a namespace, assigning the next free numeric alias.
    ///
    /// Returns the existing alias when the namespace is already registered.
    pub fn add(&mut self, uri: &str) -> String {
        if let Some(alias) = self.aliases.get(uri) {
            return alias.clone();
        }
        // Skip numerals already taken by explicit aliases.
        let mut alias = self.next_alias.to_string();
        while self.uri_for(&alias).is_some() {
            self.next_alias += 1;
            alias = self.next_alias.to_string();
        }
        self.next_alias += 1;
        self.aliases.insert(uri.to_string(), alias.clone());
        alias
    }

    /// Register a namespace under an explicit alias.
    ///
    /// Used when reconstructing a message from its transport encoding,
    /// where the wire fixes the alias. Symbolic aliases are allowed; `.`
    /// is not, and `ns` is reserved for declarations.
    pub fn add_alias(&mut self, uri: &str, alias: &str) -> Result<()> {
        if alias.is_empty() || alias == NS_KEY || alias.contains('.') {
            return Err(Error::InvalidAlias(alias.to_string()));
        }
        if let Some(existing) = self.uri_for(alias) {
            if existing == uri {
                return Ok(());
            }
            return Err(Error::InvalidAlias(format!(
                "{} already refers to {}",
                alias, existing
            )));
        }
        if let Some(current) = self.aliases.get(uri) {
            return Err(Error::InvalidAlias(format!(
                "{} is already registered as {}",
                uri, current
            )));
        }
        self.aliases.insert(uri.to_string(), alias.to_string());
        Ok(())
    }

    /// Iterate `(namespace, alias)` pairs in first-registration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(uri, a)| (uri.as_str(), a.as_str()))
    }

    /// Number of registered namespaces
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Check if no namespaces are registered
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
