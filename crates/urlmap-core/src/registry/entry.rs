use serde::{Deserialize, Serialize};

use super::error::{MalformedReason, RegistryError};

/// Unvalidated entry record as read from a definition source.
///
/// Both fields are optional so that a missing field is reported as a
/// malformed entry with its position, not as an opaque parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntrySpec {
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    /// Number of items when the record came from a pair-form array longer
    /// than two; never serialized.
    #[serde(skip)]
    pub(crate) extra_items: Option<usize>,
}

impl EntrySpec {
    pub fn new(namespace: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            base_url: Some(base_url.into()),
            extra_items: None,
        }
    }

    /// Build a record from the loose `[namespace, base_url]` pair form.
    pub fn from_items(items: Vec<String>) -> Self {
        let len = items.len();
        let mut it = items.into_iter();
        Self {
            namespace: it.next(),
            base_url: it.next(),
            extra_items: (len > 2).then_some(len),
        }
    }

    /// Validate this record as entry number `index` of its definition.
    pub(crate) fn validate(self, index: usize) -> Result<Entry, RegistryError> {
        if let Some(n) = self.extra_items {
            return Err(RegistryError::malformed(index, MalformedReason::TooManyFields(n)));
        }

        let namespace = self
            .namespace
            .ok_or_else(|| RegistryError::malformed(index, MalformedReason::MissingNamespace))?;
        if namespace.is_empty() || namespace.chars().any(char::is_whitespace) {
            return Err(RegistryError::malformed(index, MalformedReason::InvalidNamespace));
        }

        let base_url = match self.base_url {
            Some(u) if !u.is_empty() => u,
            _ => return Err(RegistryError::malformed(index, MalformedReason::MissingBaseUrl)),
        };
        // Url::parse strips these silently; the stored string must match what was checked.
        if base_url.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(RegistryError::malformed(index, MalformedReason::UrlHasWhitespace));
        }
        // Parsed only to check it; the input string is stored as given.
        let parsed = url::Url::parse(&base_url)
            .map_err(|e| RegistryError::malformed(index, MalformedReason::InvalidUrl(e)))?;
        if parsed.cannot_be_a_base() {
            return Err(RegistryError::malformed(index, MalformedReason::NotABaseUrl));
        }
        if !base_url.ends_with('/') {
            return Err(RegistryError::malformed(index, MalformedReason::MissingTrailingSlash));
        }

        Ok(Entry {
            namespace,
            base_url,
        })
    }
}

impl<N, U> From<(N, U)> for EntrySpec
where
    N: Into<String>,
    U: Into<String>,
{
    fn from((namespace, base_url): (N, U)) -> Self {
        EntrySpec::new(namespace, base_url)
    }
}

impl From<Entry> for EntrySpec {
    fn from(entry: Entry) -> Self {
        EntrySpec::new(entry.namespace, entry.base_url)
    }
}

/// A validated namespace → base URL mapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    namespace: String,
    base_url: String,
}

impl Entry {
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Base URL exactly as it was registered, trailing slash included.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
