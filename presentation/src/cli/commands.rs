//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The chat reply text
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for anipoll
#[derive(Parser, Debug)]
#[command(name = "anipoll")]
#[command(author, version, about = "Create anime season polls from chat commands")]
#[command(long_about = r#"
anipoll turns an `!anipoll` chat command into a poll of the season's anime.

The command is parsed, the season's titles are fetched from AniList page by
page, and the assembled poll is sent to the voting service. The reply that
would be posted in chat is printed to stdout.

Configuration files are loaded from (in priority order):
1. ANIPOLL_* environment variables
2. --config <path>     Explicit config file
3. ./anipoll.toml      Project-level config
4. ~/.config/anipoll/config.toml   Global config

Example:
  anipoll '!anipoll'
  anipoll '!anipoll -s spring -y 2024 -f TV,MOVIE "Something else"'
  anipoll --dry-run -o json '!anipoll -n 3 -ends "12/24/24 18:00"'
  echo '!anipoll -s fall' | anipoll --stdin
"#)]
pub struct Cli {
    /// The chat message to handle, command name included
    pub message: Option<String>,

    /// Read one chat message per line from stdin
    #[arg(long, conflicts_with = "message")]
    pub stdin: bool,

    /// Author id attached to the command
    #[arg(long, value_name = "ID", default_value = "cli")]
    pub author_id: String,

    /// Server id attached to the command
    #[arg(long, value_name = "ID", default_value = "")]
    pub server_id: String,

    /// Build the poll request and print it without creating the poll
    #[arg(long)]
    pub dry_run: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
