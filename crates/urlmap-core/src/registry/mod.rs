//! Namespace → documentation base URL registry.
//!
//! A [`Registry`] is built once from an ordered definition and is read-only
//! afterwards:
//! - entries are validated on load (namespace present, absolute URL with a
//!   trailing slash), so broken links are caught before first use
//! - a namespace may appear only once; duplicates are rejected
//! - lookups are exact and case-sensitive, with no prefix or fallback match
//!
//! Registries carry no interior mutability and can be shared across threads
//! behind an `Arc` without locking.

mod entry;
mod error;

use std::collections::HashMap;

pub use entry::{Entry, EntrySpec};
pub use error::{MalformedReason, RegistryError};

/// Immutable, ordered set of namespace → base URL entries for one profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// Build a registry from an ordered definition.
    ///
    /// Entries are validated in input order and the first failure is
    /// returned. A namespace seen twice fails with
    /// [`RegistryError::DuplicateNamespace`] naming both positions.
    pub fn load<I, E>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = E>,
        E: Into<EntrySpec>,
    {
        let mut registry = Registry::default();
        for (index, spec) in entries.into_iter().enumerate() {
            let entry = spec.into().validate(index)?;
            if let Some(&first) = registry.index.get(entry.namespace()) {
                return Err(RegistryError::DuplicateNamespace {
                    namespace: entry.namespace().to_string(),
                    index,
                    first,
                });
            }
            registry
                .index
                .insert(entry.namespace().to_string(), registry.entries.len());
            registry.entries.push(entry);
        }
        tracing::debug!("loaded registry with {} entries", registry.entries.len());
        Ok(registry)
    }

    /// Base URL registered for `namespace`, unmodified.
    pub fn resolve(&self, namespace: &str) -> Result<&str, RegistryError> {
        self.get(namespace)
            .map(Entry::base_url)
            .ok_or_else(|| RegistryError::UnknownNamespace(namespace.to_string()))
    }

    pub fn get(&self, namespace: &str) -> Option<&Entry> {
        self.index.get(namespace).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, namespace: &str) -> bool {
        self.index.contains_key(namespace)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in definition order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Entry::namespace)
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
