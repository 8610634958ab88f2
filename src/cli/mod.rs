//! CLI command definitions and handlers

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod args;
pub mod context;
pub mod invite;
pub mod sync;

pub use args::GlobalOptions;
pub use context::CommandContext;

/// ghteams - Keep GitHub organization teams in line with a YAML document
#[derive(Parser, Debug)]
#[command(name = "ghteams")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute (reconciles teams when omitted)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Desired-state document
    #[arg(long, value_name = "FILE", default_value = "teams.yaml")]
    pub teams: PathBuf,

    /// Export live teams as YAML to stdout instead of reconciling
    #[arg(short = 'd', long)]
    pub download: bool,

    /// GitHub organization
    #[arg(long, global = true, env = "GHTEAMS_ORG", hide_env = true)]
    pub org: Option<String>,

    /// Report changes without making them
    #[arg(short = 'n', long, global = true)]
    pub dry_run: bool,

    /// Suppress progress output
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Plain output, suitable for pasting into markdown
    #[arg(long, global = true)]
    pub markdown: bool,

    /// Enable debug logging
    #[arg(long, global = true, env = "GHTEAMS_DEBUG", hide_env = true)]
    pub debug: bool,

    /// GitHub API root (for GitHub Enterprise or testing)
    #[arg(long, global = true, env = "GITHUB_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Personal access token
    #[arg(long, global = true, env = "GH_TOKEN", hide = true, hide_env_values = true)]
    pub token: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Invite listed users who are not yet organization members
    Invite {
        /// YAML list of usernames
        #[arg(long, value_name = "FILE", default_value = "members.yaml")]
        members: PathBuf,
    },
}
