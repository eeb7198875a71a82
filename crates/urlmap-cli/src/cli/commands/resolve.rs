//! `urlmap resolve` – print the base URL of one namespace.

use anyhow::{Context, Result};
use urlmap_core::profile::Profiles;

/// Base URL of `namespace` in `profile`, with the profile named on failure.
pub(crate) fn resolve_base_url<'p>(
    profiles: &'p Profiles,
    profile: &str,
    namespace: &str,
) -> Result<&'p str> {
    let registry = profiles.get(profile)?;
    let base_url = registry
        .resolve(namespace)
        .with_context(|| format!("in profile {profile}"))?;
    Ok(base_url)
}

pub fn run_resolve(profiles: &Profiles, profile: &str, namespace: &str) -> Result<()> {
    println!("{}", resolve_base_url(profiles, profile, namespace)?);
    Ok(())
}
