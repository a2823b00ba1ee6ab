//! Protocol extension seam

use indexmap::IndexMap;

/// A protocol extension: one namespace URI plus the arguments it adds to
/// a request. All of an extension's keys share one namespace alias on the
/// wire.
pub trait Extension {
    /// Namespace URI identifying the extension
    fn namespace_uri(&self) -> &str;

    /// Arguments the extension contributes, unprefixed
    fn extension_args(&self) -> IndexMap<String, String>;
}
