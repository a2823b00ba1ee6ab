//! KV-form encoding
//!
//! The line-oriented `key:value` encoding OpenID uses for direct provider
//! responses and association material. Both directions are lenient:
//! suspicious input is logged and worked around rather than failing the
//! whole document, since remote parties routinely send CRLF line endings
//! and stray whitespace.

use indexmap::IndexMap;
use tracing::warn;

/// Encode key/value pairs as KV-form.
///
/// Keys must not contain `:` or newlines, and values must not contain
/// newlines; offenders are logged and emitted as-is.
pub fn to_kv<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut out = String::new();
    for (key, value) in pairs {
        if key.contains(':') || key.contains('\n') {
            warn!("invalid characters in KV key: {:?}", key);
        }
        if value.contains('\n') {
            warn!("newline in KV value for key {:?}", key);
        }
        out.push_str(key);
        out.push(':');
        out.push_str(value);
        out.push('\n');
    }
    out
}

/// Parse KV-form text into ordered key/value pairs.
///
/// Lines without a colon are skipped with a warning; surrounding
/// whitespace on keys and values is stripped.
pub fn parse(text: &str) -> IndexMap<String, String> {
    let mut out = IndexMap::new();
    for (lineno, line) in text.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        match line.split_once(':') {
            Some((key, value)) => {
                out.insert(key.trim().to_string(), value.trim().to_string());
            }
            None => {
                warn!("KV line {} has no colon, skipping: {:?}", lineno + 1, line);
            }
        }
    }
    out
}
