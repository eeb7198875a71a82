//! `urlmap check` – validate a definition file.

use anyhow::{Context, Result};
use std::path::Path;
use urlmap_core::source::{self, Format};

pub fn run_check(path: &Path, format: Option<Format>) -> Result<()> {
    let registry = source::load_file(path, format)
        .with_context(|| format!("{} is not a valid definition", path.display()))?;
    tracing::info!("checked {} ({} entries)", path.display(), registry.len());
    println!("{}: {} namespaces OK", path.display(), registry.len());
    Ok(())
}
