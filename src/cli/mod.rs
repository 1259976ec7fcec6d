//! CLI argument parsing for taskhint
//!
//! Global flags: --config, --format, --quiet, --verbose, --log-level, --log-json

pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

/// Taskhint - similar-item suggestions for task, habit and bucket-list apps
#[derive(Parser, Debug)]
#[command(name = "taskhint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: $TASKHINT_CONFIG, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Debug logging and phase timings
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "info", "taskhint=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP suggestion service
    Serve {
        /// Address to listen on (overrides config `bind`)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Rank items from a JSON file against TEXT without a server
    Rank {
        /// Text being typed
        text: String,

        /// JSON array of existing items
        #[arg(long, short)]
        tasks: Option<PathBuf>,

        /// Maximum suggestions to return
        #[arg(long, short = 'k')]
        top_k: Option<usize>,
    },

    /// Suggest a category for a title
    Category {
        title: String,

        #[arg(long, short, default_value = "")]
        description: String,
    },

    /// Ask a running service for suggestions
    Suggest {
        /// Text being typed
        text: String,

        /// JSON array of existing items to send along
        #[arg(long, short)]
        tasks: Option<PathBuf>,

        #[arg(long, env = "TASKHINT_SERVER", default_value = taskhint::client::DEFAULT_SERVER)]
        server: String,
    },

    /// Read input lines from stdin and print debounced suggestions
    Watch {
        /// JSON array of existing items to send along
        #[arg(long, short)]
        tasks: Option<PathBuf>,

        #[arg(long, env = "TASKHINT_SERVER", default_value = taskhint::client::DEFAULT_SERVER)]
        server: String,

        /// Quiet period before a lookup fires
        #[arg(long, default_value_t = 500)]
        delay_ms: u64,
    },
}
