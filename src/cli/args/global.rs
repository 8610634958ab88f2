//! Global CLI options shared across all commands
//!
//! Collected once in `main.rs` after parsing and handed to each handler, so
//! handler signatures stay the same as flags are added.

use crate::cli::Cli;
use crate::config::{RunMode, Settings};

/// Global CLI options passed to all command handlers.
///
/// Environment fallbacks (`GH_TOKEN`, `GHTEAMS_ORG`, `GITHUB_API_URL`) have
/// already been applied by clap; nothing here is validated yet.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub org: Option<String>,
    pub token: Option<String>,
    pub api_url: Option<String>,
    pub timeout: Option<u64>,
    pub dry_run: bool,
    pub quiet: bool,
    pub markdown: bool,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            org: cli.org.clone(),
            token: cli.token.clone(),
            api_url: cli.api_url.clone(),
            timeout: cli.timeout,
            dry_run: cli.dry_run,
            quiet: cli.quiet,
            markdown: cli.markdown,
        }
    }

    /// Unvalidated configuration settings.
    pub fn settings(&self) -> Settings {
        Settings {
            org: self.org.clone(),
            token: self.token.clone(),
            api_url: self.api_url.clone(),
            timeout_secs: self.timeout,
            mode: RunMode {
                dry_run: self.dry_run,
                quiet: self.quiet,
                markdown: self.markdown,
            },
        }
    }
}
