//! Registry definition sources: TOML, JSON and gi-docgen `urlmap.js`.
//!
//! Every format decodes into a list of [`EntrySpec`] records and goes through
//! [`Registry::load`], so validation is identical whatever the input.

mod render;
mod script;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::registry::{EntrySpec, Registry, RegistryError};

pub use render::render;

/// On-disk form of a registry definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// `[[entry]]` tables with `namespace` and `base_url` keys.
    Toml,
    /// Top-level array of `[namespace, base_url]` pairs or records.
    Json,
    /// `baseURLs = [ ... ]` script as read by gi-docgen.
    Js,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Toml, Format::Json, Format::Js];

    pub fn as_str(self) -> &'static str {
        match self {
            Format::Toml => "toml",
            Format::Json => "json",
            Format::Js => "js",
        }
    }

    /// Guess the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Format> {
        let ext = path.extension()?.to_str()?;
        ext.parse().ok()
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "toml" => Ok(Format::Toml),
            "json" => Ok(Format::Json),
            "js" | "javascript" => Ok(Format::Js),
            _ => Err(SourceError::UnknownFormat(s.to_string())),
        }
    }
}

/// Failure reading or decoding a registry definition.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown definition format {0:?} (expected toml, json or js)")]
    UnknownFormat(String),

    #[error("invalid TOML definition: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON definition error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to render TOML definition: {0}")]
    TomlRender(#[from] toml::ser::Error),

    #[error("invalid urlmap script at byte {offset}: {message}")]
    Script { offset: usize, message: String },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// TOML document layout: `[[entry]]` array of tables.
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct TomlDefinition {
    #[serde(default, rename = "entry")]
    pub(crate) entries: Vec<EntrySpec>,
}

/// One element of a JSON definition: either the loose pair or a record.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonEntry {
    Pair(Vec<String>),
    Record(EntrySpec),
}

impl From<JsonEntry> for EntrySpec {
    fn from(entry: JsonEntry) -> Self {
        match entry {
            JsonEntry::Pair(items) => EntrySpec::from_items(items),
            JsonEntry::Record(spec) => spec,
        }
    }
}

/// Decode `text` in the given format into entry records, without validating.
pub fn parse_entries(text: &str, format: Format) -> Result<Vec<EntrySpec>, SourceError> {
    let specs = match format {
        Format::Toml => toml::from_str::<TomlDefinition>(text)?.entries,
        Format::Json => serde_json::from_str::<Vec<JsonEntry>>(text)?
            .into_iter()
            .map(EntrySpec::from)
            .collect(),
        Format::Js => script::parse_script(text)?
            .into_iter()
            .map(EntrySpec::from_items)
            .collect(),
    };
    Ok(specs)
}

/// Decode and validate a registry definition held in memory.
pub fn parse_str(text: &str, format: Format) -> Result<Registry, SourceError> {
    let specs = parse_entries(text, format)?;
    Ok(Registry::load(specs)?)
}

/// Read a registry definition from disk.
///
/// When `format` is `None` it is guessed from the file extension.
pub fn load_file(path: &Path, format: Option<Format>) -> Result<Registry, SourceError> {
    let format = match format.or_else(|| Format::from_path(path)) {
        Some(f) => f,
        None => {
            return Err(SourceError::UnknownFormat(
                path.extension()
                    .map(|e| e.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            ))
        }
    };
    let text = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("loading {} definition from {}", format, path.display());
    parse_str(&text, format)
}
