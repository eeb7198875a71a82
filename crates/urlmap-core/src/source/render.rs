//! Write a registry back out in any supported definition format.

use std::fmt::Write;

use super::{Format, SourceError, TomlDefinition};
use crate::registry::{EntrySpec, Registry};

/// Render `registry` in `format`, preserving definition order.
pub fn render(registry: &Registry, format: Format) -> Result<String, SourceError> {
    match format {
        Format::Toml => render_toml(registry),
        Format::Json => render_json(registry),
        Format::Js => Ok(render_script(registry)),
    }
}

fn render_toml(registry: &Registry) -> Result<String, SourceError> {
    let doc = TomlDefinition {
        entries: registry.iter().cloned().map(EntrySpec::from).collect(),
    };
    Ok(toml::to_string_pretty(&doc)?)
}

fn render_json(registry: &Registry) -> Result<String, SourceError> {
    let pairs: Vec<[&str; 2]> = registry
        .iter()
        .map(|e| [e.namespace(), e.base_url()])
        .collect();
    let mut out = serde_json::to_string_pretty(&pairs)?;
    out.push('\n');
    Ok(out)
}

fn render_script(registry: &Registry) -> String {
    let mut out = String::from("baseURLs = [\n");
    for entry in registry {
        let _ = writeln!(
            out,
            "    [ {}, {} ],",
            quote(entry.namespace()),
            quote(entry.base_url())
        );
    }
    out.push_str("]\n");
    out
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' | '\'' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}
