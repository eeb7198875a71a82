//! `urlmap link` – build a full documentation link for a page under a namespace.

use anyhow::Result;
use urlmap_core::profile::Profiles;

use super::resolve::resolve_base_url;

/// Append a page path to a base URL. Base URLs always end with `/`, so
/// leading slashes on the page path are dropped rather than doubled.
pub(crate) fn join_link(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url, path.trim_start_matches('/'))
}

pub fn run_link(profiles: &Profiles, profile: &str, namespace: &str, path: &str) -> Result<()> {
    let link = join_link(resolve_base_url(profiles, profile, namespace)?, path);
    tracing::debug!("link {}:{} -> {}", namespace, path, link);
    println!("{link}");
    Ok(())
}
