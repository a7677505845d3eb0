//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Telephone directory: people and businesses in a name-keyed store with flat-file save/load
#[derive(Parser, Debug)]
#[command(name = "teldir")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug logging to stderr (repeat for more: -d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    /// Settings file (overrides the global config)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive menu (default)
    Menu {
        /// Load contacts from this file before showing the menu
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        load: Option<PathBuf>,
    },

    /// Load a contacts file and list its entries
    List {
        /// Contacts file (`name,phone` per line)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Load a contacts file and look up one name
    Search {
        /// Contacts file (`name,phone` per line)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Exact, case-sensitive name
        name: String,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Print a commented config template
    Template,

    /// Show global config path
    Path,
}
