//! CLI argument definitions using clap.

use crate::types::{Domain, NoteType};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "launchpad")]
#[command(author, version, about = "Quick capture and dashboard for an Obsidian-style vault", long_about = None)]
pub struct Cli {
    /// Path to the vault (overrides config default)
    #[arg(long, global = true)]
    pub vault: Option<PathBuf>,

    /// Output as JSON (default)
    #[arg(long, global = true, conflicts_with_all = ["yaml", "toml"])]
    pub json: bool,

    /// Output as YAML
    #[arg(long, global = true, conflicts_with_all = ["json", "toml"])]
    pub yaml: bool,

    /// Output as TOML
    #[arg(long, global = true, conflicts_with_all = ["json", "yaml"])]
    pub toml: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (can be repeated)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.yaml {
            OutputFormat::Yaml
        } else if self.toml {
            OutputFormat::Toml
        } else {
            OutputFormat::Json
        }
    }

    /// Default log filter when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "launchpad=debug",
            _ => "trace",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Toml,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show open todos and active projects
    Dashboard,

    /// Keep the dashboard up to date as files change
    Watch(WatchArgs),

    /// Step through the quick-capture wizard interactively
    Capture,

    /// Create a note from a template
    New(NewArgs),

    /// Turn an idea into a project
    Promote(PromoteArgs),

    /// Find files by name
    Search(SearchArgs),

    /// Show or update recently opened files
    Recent(RecentArgs),

    /// List domains and their note types
    Types,

    /// Print the effective settings
    Settings,
}

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Quiet period in milliseconds before rescanning
    #[arg(long, default_value = "500")]
    pub debounce_ms: u64,
}

#[derive(Args, Debug)]
pub struct NewArgs {
    /// Domain (business, personal, lists)
    #[arg(long, value_parser = parse_domain)]
    pub domain: Domain,

    /// Note type within the domain (idea, todo, shopping, ...)
    #[arg(long = "type", value_parser = parse_note_type)]
    pub note_type: NoteType,

    /// Note title
    #[arg(long)]
    pub title: String,

    /// Mark the todo as important
    #[arg(long)]
    pub important: bool,

    /// Mark the todo as urgent
    #[arg(long)]
    pub urgent: bool,

    /// Due date (YYYY-MM-DD)
    #[arg(long)]
    pub due: Option<String>,

    /// Store name for shopping lists
    #[arg(long)]
    pub store: Option<String>,

    /// Business idea sparked by a problem
    #[arg(long)]
    pub problem: bool,

    /// Show what would be created without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Open the note in Obsidian afterwards
    #[arg(long)]
    pub open: bool,
}

#[derive(Args, Debug)]
pub struct PromoteArgs {
    /// Path to the idea note, relative to the vault
    pub path: PathBuf,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    /// Maximum number of results (defaults to the max_results setting)
    #[arg(long)]
    pub limit: Option<usize>,

    /// Only match markdown notes
    #[arg(long)]
    pub markdown_only: bool,
}

#[derive(Args, Debug)]
pub struct RecentArgs {
    #[command(subcommand)]
    pub command: Option<RecentCommands>,
}

#[derive(Subcommand, Debug)]
pub enum RecentCommands {
    /// Record that a file was opened
    Open {
        /// Path relative to the vault
        path: PathBuf,
    },

    /// Forget a file
    Remove {
        /// Path relative to the vault
        path: PathBuf,
    },

    /// Forget all recent files
    Clear,
}

fn parse_domain(s: &str) -> Result<Domain, String> {
    s.parse()
}

fn parse_note_type(s: &str) -> Result<NoteType, String> {
    s.parse()
}
