//! Named registries available to a process.
//!
//! Two profiles are compiled in (`gtk3`, `gtk4`): they differ only in where
//! version-specific toolkit namespaces such as `Gdk` and `Gtk` point. Config
//! `[[profiles]]` entries add more, or replace a built-in of the same name.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use crate::config::UrlmapConfig;
use crate::registry::Registry;
use crate::source::{self, Format, SourceError};

/// Profiles shipped inside the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinProfile {
    Gtk3,
    Gtk4,
}

impl BuiltinProfile {
    pub const ALL: [BuiltinProfile; 2] = [BuiltinProfile::Gtk3, BuiltinProfile::Gtk4];

    pub fn name(self) -> &'static str {
        match self {
            BuiltinProfile::Gtk3 => "gtk3",
            BuiltinProfile::Gtk4 => "gtk4",
        }
    }

    fn definition(self) -> &'static str {
        match self {
            BuiltinProfile::Gtk3 => include_str!("../profiles/gtk3.toml"),
            BuiltinProfile::Gtk4 => include_str!("../profiles/gtk4.toml"),
        }
    }

    pub fn load(self) -> Result<Registry, SourceError> {
        source::parse_str(self.definition(), Format::Toml)
    }
}

impl fmt::Display for BuiltinProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BuiltinProfile {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuiltinProfile::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| ProfileError::Unknown {
                name: s.to_string(),
                available: BuiltinProfile::ALL.map(BuiltinProfile::name).join(", "),
            })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("unknown profile {name:?} (available: {available})")]
    Unknown { name: String, available: String },

    #[error("profile {0:?} is defined more than once in the config")]
    Duplicate(String),

    #[error("failed to load profile {name:?}: {source}")]
    Load {
        name: String,
        #[source]
        source: SourceError,
    },
}

/// Profile name → registry. Registries are shared read-only via `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Profiles {
    registries: BTreeMap<String, Arc<Registry>>,
}

impl Profiles {
    /// Only the compiled-in profiles.
    pub fn builtin() -> Result<Self, ProfileError> {
        let mut registries = BTreeMap::new();
        for profile in BuiltinProfile::ALL {
            let registry = profile.load().map_err(|source| ProfileError::Load {
                name: profile.name().to_string(),
                source,
            })?;
            registries.insert(profile.name().to_string(), Arc::new(registry));
        }
        Ok(Self { registries })
    }

    /// Built-ins plus every configured profile. Relative definition paths
    /// are resolved against `base_dir` when given.
    pub fn from_config(cfg: &UrlmapConfig, base_dir: Option<&Path>) -> Result<Self, ProfileError> {
        let mut profiles = Self::builtin()?;
        let mut seen: Vec<&str> = Vec::new();

        for pc in &cfg.profiles {
            if seen.contains(&pc.name.as_str()) {
                return Err(ProfileError::Duplicate(pc.name.clone()));
            }
            seen.push(&pc.name);

            let path = match base_dir {
                Some(dir) if pc.path.is_relative() => dir.join(&pc.path),
                _ => pc.path.clone(),
            };
            let registry =
                source::load_file(&path, pc.format).map_err(|source| ProfileError::Load {
                    name: pc.name.clone(),
                    source,
                })?;

            tracing::debug!(
                "profile {} loaded from {} ({} entries)",
                pc.name,
                path.display(),
                registry.len()
            );
            if profiles
                .registries
                .insert(pc.name.clone(), Arc::new(registry))
                .is_some()
            {
                tracing::info!("profile {} from config replaces the built-in", pc.name);
            }
        }

        Ok(profiles)
    }

    pub fn get(&self, name: &str) -> Result<&Arc<Registry>, ProfileError> {
        self.registries.get(name).ok_or_else(|| ProfileError::Unknown {
            name: name.to_string(),
            available: self.names().collect::<Vec<_>>().join(", "),
        })
    }

    /// Profile names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.registries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<Registry>)> {
        self.registries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.registries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProfileConfig;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn builtin_profiles_load() {
        for profile in BuiltinProfile::ALL {
            let reg = profile.load().unwrap();
            assert!(reg.len() >= 7, "{profile} looks truncated");
            assert_eq!(reg.resolve("GLib").unwrap(), "https://docs.gtk.org/glib/");
        }
    }

    #[test]
    fn builtin_profiles_differ_on_toolkit_namespaces() {
        let gtk3 = BuiltinProfile::Gtk3.load().unwrap();
        let gtk4 = BuiltinProfile::Gtk4.load().unwrap();
        assert_eq!(gtk3.resolve("Gtk").unwrap(), "https://docs.gtk.org/gtk3/");
        assert_eq!(gtk4.resolve("Gtk").unwrap(), "https://docs.gtk.org/gtk4/");
        assert_eq!(gtk3.resolve("Gdk").unwrap(), "https://docs.gtk.org/gdk3/");
        assert_eq!(gtk4.resolve("Gdk").unwrap(), "https://docs.gtk.org/gdk4/");
        assert!(gtk3.resolve("Gsk").is_err());
        assert!(gtk4.resolve("Gsk").is_ok());
    }

    #[test]
    fn builtin_from_str() {
        assert_eq!("gtk3".parse::<BuiltinProfile>().unwrap(), BuiltinProfile::Gtk3);
        match "gtk5".parse::<BuiltinProfile>() {
            Err(ProfileError::Unknown { name, available }) => {
                assert_eq!(name, "gtk5");
                assert_eq!(available, "gtk3, gtk4");
            }
            other => panic!("expected unknown profile, got {:?}", other),
        }
    }

    #[test]
    fn default_config_yields_builtins() {
        let profiles = Profiles::from_config(&UrlmapConfig::default(), None).unwrap();
        assert_eq!(profiles.names().collect::<Vec<_>>(), ["gtk3", "gtk4"]);
        assert!(matches!(
            profiles.get("gtk5"),
            Err(ProfileError::Unknown { .. })
        ));
    }

    #[test]
    fn configured_profile_relative_to_base_dir_and_override() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("eds.js"),
            "baseURLs = [ [ 'Camel', 'https://example.org/camel/' ] ]",
        )
        .unwrap();
        fs::write(
            dir.path().join("gtk3.json"),
            r#"[["Gtk", "https://example.org/gtk3/"]]"#,
        )
        .unwrap();

        let cfg = UrlmapConfig {
            default_profile: "eds".to_string(),
            profiles: vec![
                ProfileConfig {
                    name: "eds".to_string(),
                    path: PathBuf::from("eds.js"),
                    format: None,
                },
                ProfileConfig {
                    name: "gtk3".to_string(),
                    path: dir.path().join("gtk3.json"),
                    format: None,
                },
            ],
        };
        let profiles = Profiles::from_config(&cfg, Some(dir.path())).unwrap();
        assert_eq!(profiles.len(), 3);
        assert_eq!(
            profiles.get("eds").unwrap().resolve("Camel").unwrap(),
            "https://example.org/camel/"
        );
        let gtk3 = profiles.get("gtk3").unwrap();
        assert_eq!(gtk3.len(), 1);
        assert_eq!(gtk3.resolve("Gtk").unwrap(), "https://example.org/gtk3/");
        // Untouched built-in.
        assert_eq!(
            profiles.get("gtk4").unwrap().resolve("Gtk").unwrap(),
            "https://docs.gtk.org/gtk4/"
        );
    }

    #[test]
    fn duplicate_configured_profile() {
        let pc = ProfileConfig {
            name: "eds".to_string(),
            path: PathBuf::from("does-not-matter.toml"),
            format: None,
        };
        let cfg = UrlmapConfig {
            default_profile: "eds".to_string(),
            profiles: vec![pc.clone(), pc],
        };
        // The first entry fails to load before the duplicate is seen.
        assert!(matches!(
            Profiles::from_config(&cfg, None),
            Err(ProfileError::Load { .. })
        ));

        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("eds.toml"), "").unwrap();
        let pc = ProfileConfig {
            name: "eds".to_string(),
            path: PathBuf::from("eds.toml"),
            format: None,
        };
        let cfg = UrlmapConfig {
            default_profile: "eds".to_string(),
            profiles: vec![pc.clone(), pc],
        };
        match Profiles::from_config(&cfg, Some(dir.path())) {
            Err(ProfileError::Duplicate(name)) => assert_eq!(name, "eds"),
            other => panic!("expected duplicate profile, got {:?}", other),
        }
    }

    #[test]
    fn broken_definition_names_profile() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("bad.json"),
            r#"[["Gtk", "https://example.org/gtk"]]"#,
        )
        .unwrap();
        let cfg = UrlmapConfig {
            default_profile: "gtk4".to_string(),
            profiles: vec![ProfileConfig {
                name: "bad".to_string(),
                path: PathBuf::from("bad.json"),
                format: None,
            }],
        };
        let err = Profiles::from_config(&cfg, Some(dir.path())).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("\"bad\""), "{msg}");
        assert!(msg.contains("trailing slash"), "{msg}");
    }
}
