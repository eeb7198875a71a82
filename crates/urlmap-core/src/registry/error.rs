//! Error types for registry construction and lookup.

use std::fmt;

/// Why a single entry was rejected at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    /// The entry has no namespace field.
    MissingNamespace,
    /// The namespace is empty or contains whitespace.
    InvalidNamespace,
    /// The entry has no base URL field, or it is empty.
    MissingBaseUrl,
    /// A pair-form entry carried more than two items.
    TooManyFields(usize),
    /// The base URL contains whitespace or a control character.
    UrlHasWhitespace,
    /// The base URL is not an absolute URL.
    InvalidUrl(url::ParseError),
    /// The base URL cannot take a relative path (`mailto:`, `data:`, ...).
    NotABaseUrl,
    /// The base URL does not end with `/`.
    MissingTrailingSlash,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::MissingNamespace => write!(f, "missing namespace"),
            MalformedReason::InvalidNamespace => {
                write!(f, "namespace must be non-empty and contain no whitespace")
            }
            MalformedReason::MissingBaseUrl => write!(f, "missing base URL"),
            MalformedReason::TooManyFields(n) => {
                write!(f, "expected [namespace, base_url], got {} items", n)
            }
            MalformedReason::UrlHasWhitespace => {
                write!(f, "base URL must not contain whitespace or control characters")
            }
            MalformedReason::InvalidUrl(e) => write!(f, "base URL is not absolute: {}", e),
            MalformedReason::NotABaseUrl => {
                write!(f, "base URL cannot have page paths appended to it")
            }
            MalformedReason::MissingTrailingSlash => {
                write!(f, "base URL must end with a trailing slash")
            }
        }
    }
}

/// Failure from [`Registry::load`](super::Registry::load) or
/// [`Registry::resolve`](super::Registry::resolve).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// `resolve` was called with a namespace that is not registered.
    #[error("unknown namespace: {0}")]
    UnknownNamespace(String),

    /// The same namespace appears twice in one definition.
    #[error("duplicate namespace {namespace:?} at entry {index} (first defined at entry {first})")]
    DuplicateNamespace {
        namespace: String,
        index: usize,
        first: usize,
    },

    /// An entry failed validation.
    #[error("malformed entry {index}: {reason}")]
    MalformedEntry {
        index: usize,
        reason: MalformedReason,
    },
}

impl RegistryError {
    pub(crate) fn malformed(index: usize, reason: MalformedReason) -> Self {
        RegistryError::MalformedEntry { index, reason }
    }
}
