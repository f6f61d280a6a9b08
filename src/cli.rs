//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for peoplepick using the `clap` crate.
//!
//! # Commands
//!
//! - **pick**: Interactive autocomplete picker (default)
//! - **list**: Print the people matching a query, without a terminal UI
//! - **config**: Show where the configuration lives and what it contains
//!
//! # Examples
//!
//! ```
//! use peoplepick::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["peoplepick", "list", "haver"]);
//! match cli.get_command() {
//!     Commands::List { query, .. } => assert_eq!(query.as_deref(), Some("haver")),
//!     _ => unreachable!(),
//! }
//! ```

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Dataset selection shared by commands
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct DataArgs {
    /// Dataset file (.json or .csv); overrides config
    #[arg(short = 'd', long = "data", value_name = "PATH")]
    pub data: Option<PathBuf>,
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "peoplepick")]
#[command(about = "Pick a person from a list by typing part of their name", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Use this config file instead of the default one
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive picker (default)
    #[command(visible_alias = "p")]
    Pick {
        #[command(flatten)]
        data_args: DataArgs,

        /// Debounce delay in milliseconds; overrides config
        #[arg(long = "debounce", value_name = "MS")]
        debounce: Option<u64>,

        /// Close the picker as soon as someone is selected
        #[arg(long = "exit-on-select")]
        exit_on_select: bool,

        /// Print the selection as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// List people whose name contains QUERY (case-insensitive)
    #[command(visible_alias = "ls")]
    List {
        /// Part of a name; lists everyone when omitted
        #[arg(value_name = "QUERY")]
        query: Option<String>,

        #[command(flatten)]
        data_args: DataArgs,

        /// Print matches as a JSON array
        #[arg(long = "json")]
        json: bool,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the path of the config file
    Path,
    /// Print the effective configuration
    Show,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Pick if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Pick {
            data_args: DataArgs::default(),
            debounce: None,
            exit_on_select: false,
            json: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_pick() {
        let cli = Cli::try_parse_from(["peoplepick"]).unwrap();
        assert!(matches!(
            cli.get_command(),
            Commands::Pick {
                debounce: None,
                exit_on_select: false,
                json: false,
                ..
            }
        ));
    }

    #[test]
    fn test_pick_flags() {
        let cli = Cli::try_parse_from([
            "peoplepick",
            "pick",
            "--debounce",
            "0",
            "--data",
            "people.csv",
            "--exit-on-select",
        ])
        .unwrap();

        assert_eq!(
            cli.get_command(),
            Commands::Pick {
                data_args: DataArgs {
                    data: Some(PathBuf::from("people.csv"))
                },
                debounce: Some(0),
                exit_on_select: true,
                json: false,
            }
        );
    }

    #[test]
    fn test_list_alias_and_global_flags() {
        let cli = Cli::try_parse_from(["peoplepick", "ls", "jan", "-q", "--json"]).unwrap();

        assert!(cli.quiet);
        assert_eq!(
            cli.get_command(),
            Commands::List {
                query: Some("jan".to_string()),
                data_args: DataArgs::default(),
                json: true,
            }
        );
    }

    #[test]
    fn test_negative_debounce_rejected() {
        assert!(Cli::try_parse_from(["peoplepick", "pick", "--debounce", "-5"]).is_err());
    }

    #[test]
    fn test_config_subcommand() {
        let cli =
            Cli::try_parse_from(["peoplepick", "--config", "/tmp/c.toml", "config", "show"])
                .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
        assert_eq!(
            cli.get_command(),
            Commands::Config {
                command: ConfigCommands::Show
            }
        );
    }
}
