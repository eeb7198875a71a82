//! CLI for the urlmap namespace registry.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::{Path, PathBuf};
use urlmap_core::config::{self, UrlmapConfig};
use urlmap_core::profile::Profiles;
use urlmap_core::source::Format;

use commands::{
    run_check, run_completions, run_export, run_link, run_list, run_man, run_profiles,
    run_resolve,
};

/// Top-level CLI for urlmap.
#[derive(Debug, Parser)]
#[command(name = "urlmap")]
#[command(about = "urlmap: resolve documentation namespaces to their base URLs", long_about = None)]
pub struct Cli {
    /// Config file to use instead of $URLMAP_CONFIG or ~/.config/urlmap/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the documentation base URL of a namespace.
    Resolve {
        /// Namespace, matched exactly (e.g. Gtk, GLib).
        namespace: String,
        /// Profile to look in (defaults to the config's default_profile).
        #[arg(short, long)]
        profile: Option<String>,
    },

    /// Print a full documentation link: base URL followed by a page path.
    Link {
        /// Namespace, matched exactly.
        namespace: String,
        /// Page path under the namespace's docs (e.g. class.Widget.html).
        path: String,
        /// Profile to look in (defaults to the config's default_profile).
        #[arg(short, long)]
        profile: Option<String>,
    },

    /// List the namespaces of a profile in definition order.
    List {
        /// Profile to list (defaults to the config's default_profile).
        #[arg(short, long)]
        profile: Option<String>,
    },

    /// Show all available profiles.
    Profiles,

    /// Validate a definition file without registering it.
    Check {
        /// Path to a .toml, .json or .js definition.
        path: PathBuf,
        /// Definition format (guessed from the extension when omitted).
        #[arg(long)]
        format: Option<Format>,
    },

    /// Write a profile out as a definition file on stdout.
    Export {
        /// Profile to export (defaults to the config's default_profile).
        #[arg(short, long)]
        profile: Option<String>,
        /// Output format.
        #[arg(long, default_value = "js")]
        format: Format,
    },

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Print the man page (roff).
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().run()
    }
}

impl Cli {
    pub fn run(self) -> Result<()> {
        // Commands that need no config or profiles.
        match &self.command {
            CliCommand::Check { path, format } => return run_check(path, *format),
            CliCommand::Completions { shell } => return run_completions(*shell),
            CliCommand::Man => return run_man(),
            _ => {}
        }

        let (cfg, profiles) = load_profiles(self.config.as_deref())?;
        let pick = |p: &Option<String>| p.clone().unwrap_or_else(|| cfg.default_profile.clone());

        match self.command {
            CliCommand::Resolve { namespace, profile } => {
                run_resolve(&profiles, &pick(&profile), &namespace)?
            }
            CliCommand::Link {
                namespace,
                path,
                profile,
            } => run_link(&profiles, &pick(&profile), &namespace, &path)?,
            CliCommand::List { profile } => run_list(&profiles, &pick(&profile))?,
            CliCommand::Profiles => run_profiles(&profiles, &cfg.default_profile),
            CliCommand::Export { profile, format } => {
                run_export(&profiles, &pick(&profile), format)?
            }
            CliCommand::Check { .. } | CliCommand::Completions { .. } | CliCommand::Man => {}
        }

        Ok(())
    }
}

/// Load the config and every profile it names.
///
/// An explicit `--config` file must exist; the default location is created
/// with defaults on first use.
pub(crate) fn load_profiles(config_arg: Option<&Path>) -> Result<(UrlmapConfig, Profiles)> {
    let (cfg_path, cfg) = match config_arg {
        Some(p) => (p.to_path_buf(), config::load_from(p)?),
        None => {
            let p = config::config_path()?;
            let cfg = config::load_or_init_at(&p)?;
            (p, cfg)
        }
    };
    tracing::debug!("loaded config from {}: {:?}", cfg_path.display(), cfg);

    let profiles = Profiles::from_config(&cfg, cfg_path.parent())
        .with_context(|| format!("loading profiles from {}", cfg_path.display()))?;
    Ok((cfg, profiles))
}

#[cfg(test)]
mod tests;
