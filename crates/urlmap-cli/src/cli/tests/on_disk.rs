//! Handler tests: config and profile files in a temp dir, resolved through the CLI paths.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use tempfile::TempDir;
use urlmap_core::profile::ProfileError;
use urlmap_core::RegistryError;

use crate::cli::commands::resolve_base_url;
use crate::cli::{load_profiles, Cli};

/// Config with default profile `eds`, backed by a urlmap script next to it.
fn write_config(dir: &Path) -> PathBuf {
    fs::write(
        dir.join("eds.js"),
        "baseURLs = [\n    [ 'Camel', 'https://example.org/camel/' ],\n]\n",
    )
    .unwrap();
    let cfg_path = dir.join("config.toml");
    fs::write(
        &cfg_path,
        "default_profile = \"eds\"\n\n[[profiles]]\nname = \"eds\"\npath = \"eds.js\"\n",
    )
    .unwrap();
    cfg_path
}

fn setup() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let cfg_path = write_config(dir.path());
    (dir, cfg_path)
}

/// Parse `urlmap --config <cfg_path> <args..>` and run it.
fn run(cfg_path: &Path, args: &[&str]) -> anyhow::Result<()> {
    let mut argv: Vec<OsString> = vec!["urlmap".into(), "--config".into(), cfg_path.into()];
    argv.extend(args.iter().map(|a| OsString::from(*a)));
    Cli::try_parse_from(argv).unwrap().run()
}

#[test]
fn resolve_known_and_unknown_namespace_from_config() {
    let (_dir, cfg_path) = setup();
    let (cfg, profiles) = load_profiles(Some(cfg_path.as_path())).unwrap();
    assert_eq!(cfg.default_profile, "eds");

    assert_eq!(
        resolve_base_url(&profiles, "eds", "Camel").unwrap(),
        "https://example.org/camel/"
    );
    // Built-ins stay available next to configured profiles.
    assert_eq!(
        resolve_base_url(&profiles, "gtk3", "Gdk").unwrap(),
        "https://docs.gtk.org/gdk3/"
    );

    let err = resolve_base_url(&profiles, "eds", "camel").unwrap_err();
    match err.downcast_ref::<RegistryError>() {
        Some(RegistryError::UnknownNamespace(n)) => assert_eq!(n, "camel"),
        other => panic!("expected unknown namespace, got {:?}", other),
    }
    assert!(format!("{err:#}").contains("in profile eds"));
}

#[test]
fn resolve_in_unknown_profile() {
    let (_dir, cfg_path) = setup();
    let (_, profiles) = load_profiles(Some(cfg_path.as_path())).unwrap();
    let err = resolve_base_url(&profiles, "gtk5", "Gtk").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ProfileError>(),
        Some(ProfileError::Unknown { .. })
    ));
}

#[test]
fn explicit_config_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");
    assert!(load_profiles(Some(missing.as_path())).is_err());
    assert!(!missing.exists());
}

#[test]
fn run_with_config_flag() {
    let (_dir, cfg_path) = setup();

    run(&cfg_path, &["resolve", "Camel"]).unwrap();
    run(&cfg_path, &["link", "Camel", "class.Folder.html"]).unwrap();
    run(&cfg_path, &["list"]).unwrap();
    run(&cfg_path, &["list", "-p", "gtk4"]).unwrap();
    run(&cfg_path, &["export", "--format", "toml"]).unwrap();
    assert!(run(&cfg_path, &["resolve", "Gdk"]).is_err());
    assert!(run(&cfg_path, &["list", "-p", "gtk5"]).is_err());
}
