//! Desired-state document
//!
//! The document is a YAML sequence of teams:
//!
//! ```yaml
//! - name: Core
//!   description: Core maintainers
//!   members: [alice, bob]
//!   permissions:
//!     - repo: numpy
//!       role: write
//!     - repo: archived-thing   # no role: access is revoked
//! ```
//!
//! Raw YAML is deserialized into loose records first and then validated into
//! typed [`TeamSpec`] values, so that an invalid role anywhere in the document
//! is reported before anything is sent to GitHub.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Error, Result, ValidationError};

mod members;
mod role;

pub use members::MemberList;
pub use role::Role;

/// Access a team should have on one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoPermission {
    /// Repository name within the organization
    pub repo: String,

    /// Desired role; `None` means the team should have no access
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Desired state of a single team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamSpec {
    /// Team name (unique within the document)
    pub name: String,

    /// Team description; empty or absent descriptions are never pushed
    pub description: Option<String>,

    /// Member usernames, compared case-insensitively. `None` (no `members`
    /// key) leaves membership alone; an explicit empty list removes everyone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<String>>,

    /// Per-repository access, at most one entry per repo
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<RepoPermission>,
}

impl TeamSpec {
    /// Description worth pushing to GitHub, if any.
    pub fn desired_description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

/// A validated desired-state document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub teams: Vec<TeamSpec>,
}

#[derive(Debug, Deserialize)]
struct RawTeam {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    members: Option<Vec<String>>,
    #[serde(default)]
    permissions: Option<Vec<RawPermission>>,
}

#[derive(Debug, Deserialize)]
struct RawPermission {
    repo: String,
    #[serde(default)]
    role: Option<String>,
}

impl Document {
    /// Load and validate a document from disk.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = read_file(path)?;
        Self::parse(&contents).map_err(|err| with_path(path, err))
    }

    /// Parse and validate a document from YAML text.
    pub fn parse(contents: &str) -> Result<Self> {
        let raw: Option<Vec<RawTeam>> = serde_yaml::from_str(contents)?;
        Self::validate(raw.unwrap_or_default())
    }

    fn validate(raw: Vec<RawTeam>) -> Result<Self> {
        let mut names = HashSet::new();
        let mut teams = Vec::with_capacity(raw.len());

        for team in raw {
            if team.name.trim().is_empty() {
                return Err(ValidationError::EmptyTeamName.into());
            }
            if !names.insert(team.name.clone()) {
                return Err(ValidationError::DuplicateTeam(team.name).into());
            }

            let mut repos = HashSet::new();
            let mut permissions = Vec::new();
            for perm in team.permissions.unwrap_or_default() {
                if !repos.insert(perm.repo.to_lowercase()) {
                    return Err(ValidationError::DuplicateRepo {
                        team: team.name,
                        repo: perm.repo,
                    }
                    .into());
                }

                let role = match perm.role {
                    None => None,
                    Some(value) => match Role::parse(&value) {
                        Some(role) => Some(role),
                        None => {
                            return Err(ValidationError::InvalidRole {
                                team: team.name,
                                repo: perm.repo,
                                role: value,
                            }
                            .into());
                        }
                    },
                };

                permissions.push(RepoPermission {
                    repo: perm.repo,
                    role,
                });
            }

            teams.push(TeamSpec {
                name: team.name,
                description: team.description,
                members: team.members,
                permissions,
            });
        }

        Ok(Self { teams })
    }

    /// Render the document as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.teams)?)
    }
}

fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ConfigError::DocumentNotFound(path.display().to_string()).into());
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Attach the file path to YAML syntax errors.
fn with_path(path: &Path, err: Error) -> Error {
    match err {
        Error::Yaml(e) => ConfigError::ParseError {
            path: path.display().to_string(),
            reason: e.to_string(),
        }
        .into(),
        other => other,
    }
}
