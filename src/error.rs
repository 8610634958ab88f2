//! Error types for ghteams

use thiserror::Error;

/// Result type alias for ghteams operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// GitHub API errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Cannot decode JSON response from {url}: {reason}")]
    InvalidResponse { url: String, reason: String },

    #[error("Error retrieving {url}: {message}")]
    Remote { url: String, message: String },

    #[error("Expected a list from paginated endpoint {url}")]
    UnexpectedShape { url: String },

    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("Team `{0}` has no slug; it must exist on GitHub before it can be modified")]
    UnresolvedTeam(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors, all reported before any network activity
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "GitHub token not found. Create a classic token with `repo` and `admin:org` scopes and export it as GH_TOKEN."
    )]
    MissingToken,

    #[error("Organization not configured. Pass `--org <ORG>` or set GHTEAMS_ORG.")]
    MissingOrg,

    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    #[error("Failed to parse {path}: {reason}")]
    ParseError { path: String, reason: String },
}

/// Desired-state document validation errors
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error(
        "Invalid role `{role}` for repo `{repo}` in team `{team}` (expected one of read, triage, write, maintain, admin)"
    )]
    InvalidRole {
        team: String,
        repo: String,
        role: String,
    },

    #[error("Team `{0}` is declared more than once")]
    DuplicateTeam(String),

    #[error("Repo `{repo}` is listed more than once in team `{team}`")]
    DuplicateRepo { team: String, repo: String },

    #[error("Team names must not be empty")]
    EmptyTeamName,
}
