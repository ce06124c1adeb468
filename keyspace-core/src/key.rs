//! Namespace resolution and key qualification.

use bytes::Bytes;
use smol_str::SmolStr;

use crate::error::KeyspaceError;

/// Namespace prefix applied to every logical key.
///
/// Resolved exactly once, from explicit configuration, and immutable for the
/// lifetime of the client that holds it. When namespacing is enabled the
/// explicit namespace wins; a blank namespace falls back to the application
/// identity; if neither is usable the prefix is empty and keys pass through
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Namespace {
    // Either empty or "<namespace>." with the separator baked in.
    prefix: SmolStr,
}

impl Namespace {
    /// Resolve the namespace from configuration values.
    ///
    /// `namespace` and `app_name` are trimmed; whitespace-only values count
    /// as absent.
    pub fn resolve(enabled: bool, namespace: Option<&str>, app_name: Option<&str>) -> Self {
        if !enabled {
            return Self::disabled();
        }
        let picked = namespace
            .map(str::trim)
            .filter(|ns| !ns.is_empty())
            .or_else(|| app_name.map(str::trim).filter(|name| !name.is_empty()));
        match picked {
            Some(ns) => Self {
                prefix: smol_str::format_smolstr!("{ns}."),
            },
            None => Self::disabled(),
        }
    }

    /// Namespace that leaves keys untouched.
    pub fn disabled() -> Self {
        Self {
            prefix: SmolStr::default(),
        }
    }

    /// The raw prefix, separator included; empty when namespacing is off.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Qualify a raw key with the namespace prefix.
    ///
    /// Fails with [`KeyspaceError::EmptyKey`] before any store interaction
    /// when the raw key is empty.
    pub fn qualify(&self, key: &str) -> Result<String, KeyspaceError> {
        if key.is_empty() {
            return Err(KeyspaceError::EmptyKey);
        }
        Ok(format!("{}{}", self.prefix, key))
    }
}

/// Encode a hash field identifier as UTF-8 bytes.
///
/// Fields are serialized independently of the value format so that hashes
/// written by one value format stay addressable under another. Fails with
/// [`KeyspaceError::EmptyField`] when the field is empty.
pub fn encode_field(field: &str) -> Result<Bytes, KeyspaceError> {
    if field.is_empty() {
        return Err(KeyspaceError::EmptyField);
    }
    Ok(Bytes::copy_from_slice(field.as_bytes()))
}
