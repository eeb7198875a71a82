//! `urlmap list` – show the namespaces of one profile.

use anyhow::Result;
use urlmap_core::profile::Profiles;

pub fn run_list(profiles: &Profiles, profile: &str) -> Result<()> {
    let registry = profiles.get(profile)?;
    if registry.is_empty() {
        println!("Profile {profile} has no namespaces.");
        return Ok(());
    }
    let width = registry
        .namespaces()
        .map(str::len)
        .max()
        .unwrap_or(0)
        .max("NAMESPACE".len());
    println!("{:<width$} {}", "NAMESPACE", "BASE URL");
    for entry in registry.iter() {
        println!("{:<width$} {}", entry.namespace(), entry.base_url());
    }
    Ok(())
}
