// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! String-keyed property block attached to every metadata object.
//!
//! Properties stash arbitrary string-encoded attributes (documentation
//! strings, UI hints, serialization flags) next to a metadata object without
//! growing its layout. Values are stored only in string form; typed access
//! goes through the standard `Display`/`FromStr` conversions.
//!
//! Typed gets fail strictly: a stored value that does not parse as the
//! requested type is reported as [`PropertyError::Parse`], never silently
//! replaced with a default. Callers that want defaulting say so with
//! [`PropertyCollection::get_or`].

use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

use parking_lot::RwLock;
use thiserror::Error;

/// Errors for typed property access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// No value is stored under the requested key.
    #[error("property not found: {0}")]
    Missing(String),

    /// A value is stored but does not parse as the requested type.
    #[error("property '{key}' value '{value}' does not parse as the requested type")]
    Parse {
        /// Key the lookup was made with.
        key: String,
        /// The stored string that failed to parse.
        value: String,
    },
}

/// A block of string-based properties.
///
/// The map is interior-mutable on purpose: metadata is often reached through
/// shared handles ([`MetaRef`](crate::MetaRef)), and annotations get attached
/// lazily on first access. [`set`](Self::set) therefore works through
/// `&self`. Individual operations take a short lock; cross-operation
/// consistency across threads is the caller's responsibility.
///
/// Keys are unique and insertion order is irrelevant. The collection never
/// stores null values, only absent keys.
#[derive(Debug, Default)]
pub struct PropertyCollection {
    entries: RwLock<BTreeMap<String, String>>,
}

impl PropertyCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize `value` to its string form and store it under `key`,
    /// overwriting any prior value for that key.
    pub fn set<T: Display>(&self, key: impl Into<String>, value: T) {
        self.entries.write().insert(key.into(), value.to_string());
    }

    /// Look up `key` and parse the stored string as `T`.
    ///
    /// Returns [`PropertyError::Missing`] when the key is absent and
    /// [`PropertyError::Parse`] when the stored string does not parse.
    /// Both are ordinary values to branch on, never panics.
    pub fn get<T: FromStr>(&self, key: &str) -> Result<T, PropertyError> {
        let entries = self.entries.read();
        let raw = entries
            .get(key)
            .ok_or_else(|| PropertyError::Missing(key.to_string()))?;
        raw.parse::<T>().map_err(|_| {
            log::debug!("[meta] property '{}' value '{}' failed to parse", key, raw);
            PropertyError::Parse {
                key: key.to_string(),
                value: raw.clone(),
            }
        })
    }

    /// Typed get with explicit defaulting: `default` is returned when the
    /// key is absent or the stored string does not parse.
    pub fn get_or<T: FromStr>(&self, key: &str, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    /// The raw stored string for `key`, or an empty string when absent.
    pub fn raw(&self, key: &str) -> String {
        self.entries.read().get(key).cloned().unwrap_or_default()
    }

    /// Returns true if a value is stored under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    /// Remove `key`, returning the stored string if there was one.
    pub fn remove(&self, key: &str) -> Option<String> {
        self.entries.write().remove(key)
    }

    /// Number of stored properties.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if no properties are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Snapshot of the stored keys.
    pub fn keys(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }
}
