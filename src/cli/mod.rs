//! CLI definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for list/query commands.
#[derive(ValueEnum, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table (default)
    #[default]
    Table,
    /// JSON (same as --json)
    Json,
    /// Comma-separated values
    Csv,
}

pub mod commands;

/// Vexim CLI - Build FiveM vehicle-shop SQL inserts from the terminal
#[derive(Parser, Debug)]
#[command(name = "vx", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory (default: ~/.vexim)
    #[arg(long, global = true, env = "VX_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output as JSON (for scripting)
    #[arg(long, alias = "robot", global = true)]
    pub json: bool,

    /// Output format (table, json, csv)
    #[arg(long, value_enum, global = true, default_value_t)]
    pub format: OutputFormat,

    /// Output only the ID/key (for scripting)
    #[arg(long, global = true)]
    pub silent: bool,

    /// Preview changes without writing anything
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (no output except errors)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a vehicle to the garage
    Add {
        /// Spawn name (internal model identifier)
        model: String,

        /// Display label shown in the shop
        name: String,

        /// Price (must be a positive number)
        #[arg(allow_hyphen_values = true)]
        price: String,

        /// Category value (built-in, custom, or ad hoc)
        #[arg(short, long, default_value = "muscle")]
        category: String,
    },

    /// List the vehicles in the garage
    List,

    /// Remove one vehicle by id (or unique id prefix)
    Remove {
        /// Vehicle id
        id: String,
    },

    /// Remove every vehicle from the garage
    Clear,

    /// Category management
    Category {
        #[command(subcommand)]
        command: CategoryCommands,
    },

    /// Generate the INSERT statement from the garage
    Sql {
        /// Copy the statement to the system clipboard
        #[arg(long)]
        copy: bool,

        /// Write the statement to a file
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Print version information
    Version,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List built-in and custom categories
    List,

    /// Add a custom category from a free-form label
    Add {
        /// Human-readable label (e.g. "Off Road Racer")
        label: String,
    },

    /// Remove a custom category by value key
    Remove {
        /// Value key (e.g. "off_road_racer")
        value: String,
    },
}

/// Supported shells for completions.
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}
