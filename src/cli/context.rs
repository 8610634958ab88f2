//! Command execution context
//!
//! Resolves configuration, builds the API client and the reporter once, so
//! handlers start from a ready-to-use value.

use log::debug;

use crate::cli::GlobalOptions;
use crate::client::GitHubClient;
use crate::config::Config;
use crate::error::Result;
use crate::output::Reporter;

/// Context for command execution containing config, client, and reporter.
pub struct CommandContext {
    /// Validated configuration
    pub config: Config,
    /// Authenticated API client
    pub client: GitHubClient,
    /// Progress and action output
    pub reporter: Reporter,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// Fails on missing token or organization without touching the network.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::resolve(&opts.settings())?;
        debug!(
            "Using organization {} at {} (timeout {:?})",
            config.org, config.api_url, config.timeout
        );

        let client = GitHubClient::new(config.token.clone(), config.timeout)?
            .with_base_url(config.api_url.clone());
        let reporter = Reporter::new(config.mode.quiet, config.mode.markdown);

        Ok(Self {
            config,
            client,
            reporter,
        })
    }

    pub fn org(&self) -> &str {
        &self.config.org
    }

    pub fn dry_run(&self) -> bool {
        self.config.mode.dry_run
    }
}
