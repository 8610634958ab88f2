//! Team repository access models

use serde::{Deserialize, Serialize};

use crate::document::Role;

/// Repository owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoOwner {
    pub login: String,
}

/// Legacy permission flags reported alongside a team repository
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoPermissionFlags {
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub maintain: bool,
    #[serde(default)]
    pub push: bool,
    #[serde(default)]
    pub triage: bool,
    #[serde(default)]
    pub pull: bool,
}

impl RepoPermissionFlags {
    /// Highest built-in role granted by these flags.
    pub fn highest(&self) -> Option<Role> {
        if self.admin {
            Some(Role::Admin)
        } else if self.maintain {
            Some(Role::Maintain)
        } else if self.push {
            Some(Role::Write)
        } else if self.triage {
            Some(Role::Triage)
        } else if self.pull {
            Some(Role::Read)
        } else {
            None
        }
    }
}

/// A repository a team has access to, from `GET /orgs/{org}/teams/{slug}/repos`
/// or the repository-media-type variant of the per-repo check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRepo {
    /// Repository name (without owner)
    pub name: String,

    #[serde(default)]
    pub owner: Option<RepoOwner>,

    /// Role name as GitHub reports it (may be a custom org role)
    #[serde(default)]
    pub role_name: Option<String>,

    #[serde(default)]
    pub permissions: Option<RepoPermissionFlags>,
}

impl TeamRepo {
    /// Raw role string to compare against desired state.
    ///
    /// Falls back to the highest permission flag, in legacy vocabulary, when
    /// `role_name` is missing.
    pub fn live_role(&self) -> Option<String> {
        if let Some(role) = &self.role_name {
            return Some(role.clone());
        }
        self.permissions
            .as_ref()
            .and_then(RepoPermissionFlags::highest)
            .map(|role| role.api_permission().to_string())
    }

    /// Built-in role for export. Custom roles collapse onto their permission flags.
    pub fn effective_role(&self) -> Option<Role> {
        self.role_name
            .as_deref()
            .and_then(Role::from_live)
            .or_else(|| {
                self.permissions
                    .as_ref()
                    .and_then(RepoPermissionFlags::highest)
            })
    }
}

/// Request body for `PUT /orgs/{org}/teams/{slug}/repos/{owner}/{repo}`
#[derive(Debug, Clone, Serialize)]
pub struct RepoPermissionRequest {
    pub permission: String,
}
