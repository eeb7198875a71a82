//! `urlmap export` – render a profile as a definition file.

use anyhow::{Context, Result};
use urlmap_core::profile::Profiles;
use urlmap_core::source::{self, Format};

pub fn run_export(profiles: &Profiles, profile: &str, format: Format) -> Result<()> {
    let registry = profiles.get(profile)?;
    let text = source::render(registry, format)
        .with_context(|| format!("rendering profile {profile} as {format}"))?;
    print!("{text}");
    Ok(())
}
