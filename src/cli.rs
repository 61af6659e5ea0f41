//! Clap adapter.
//!
//! This module is the optional integration layer between the crate's
//! framework-agnostic core and the [clap](https://docs.rs/clap) CLI parser,
//! compiled only when the `clap` Cargo feature is enabled (on by default).
//!
//! [`ConfigArgs`] is a clap derive struct you embed in your own parser to
//! get `config list|gen|get|set` subcommands over the project's
//! configuration document. The only bridge to the core is
//! [`ConfigArgs::into_action()`], which converts parsed arguments into a
//! [`ConfigAction`](crate::ConfigAction); from there everything flows
//! through the clap-free [`handle`](crate::handle) dispatch.
//!
//! Hosts that use a different argument parser (or none — the GUI front end)
//! construct [`ConfigAction`](crate::ConfigAction) values directly.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::types::ConfigAction;

/// Clap-derived args for the `config` subcommand group.
///
/// Embed this into your app's clap derive:
/// ```ignore
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
///
/// #[derive(Subcommand)]
/// enum Commands {
///     Config(ConfigArgs),
/// }
/// ```
#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: Option<ConfigSubcommand>,
}

/// Available config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Show all configuration key-value pairs.
    List,
    /// Generate a default configuration document.
    Gen {
        /// Write to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show the current value of a config key.
    Get {
        /// Dotted key path (e.g. "compiler.warnings.level").
        key: String,
    },
    /// Set a configuration value and save the document.
    Set {
        /// Dotted key path (e.g. "compiler.warnings.level").
        key: String,
        /// Value to set. Lists are comma-separated.
        value: String,
    },
}

impl ConfigArgs {
    /// Convert clap-parsed args into a framework-agnostic `ConfigAction`.
    ///
    /// Bare `config` (no subcommand) and explicit `config list` both map to
    /// `ConfigAction::List`.
    pub fn into_action(self) -> ConfigAction {
        match self.action {
            None | Some(ConfigSubcommand::List) => ConfigAction::List,
            Some(ConfigSubcommand::Gen { output }) => ConfigAction::Gen { output },
            Some(ConfigSubcommand::Get { key }) => ConfigAction::Get { key },
            Some(ConfigSubcommand::Set { key, value }) => ConfigAction::Set { key, value },
        }
    }
}
