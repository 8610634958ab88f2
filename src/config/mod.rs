//! Run configuration
//!
//! Everything a run needs is resolved once, from command-line flags and their
//! environment fallbacks, and validated before the first network request.

use std::time::Duration;

use crate::client::github::{API_BASE_URL, DEFAULT_TIMEOUT};
use crate::error::{ConfigError, Result};

/// How mutations and progress are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunMode {
    /// Report mutations instead of sending them
    pub dry_run: bool,
    /// Suppress progress and action lines
    pub quiet: bool,
    /// Plain output suitable for rendered markdown
    pub markdown: bool,
}

/// Resolved configuration for one run
#[derive(Debug, Clone)]
pub struct Config {
    /// Organization login
    pub org: String,

    /// Personal access token
    pub token: String,

    /// API root, without trailing slash
    pub api_url: String,

    /// Per-request timeout
    pub timeout: Duration,

    pub mode: RunMode,
}

/// Unvalidated settings, as collected from flags and environment.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub org: Option<String>,
    pub token: Option<String>,
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub mode: RunMode,
}

/// Treat unset and blank values alike.
fn present(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl Config {
    /// Validate settings into a configuration.
    pub fn resolve(settings: &Settings) -> Result<Self> {
        let token = present(&settings.token).ok_or(ConfigError::MissingToken)?;
        let org = present(&settings.org).ok_or(ConfigError::MissingOrg)?;

        let api_url = present(&settings.api_url)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| API_BASE_URL.to_string());

        let timeout = settings
            .timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        Ok(Self {
            org,
            token,
            api_url,
            timeout,
            mode: settings.mode,
        })
    }
}
