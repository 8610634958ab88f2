//! Team API trait
//!
//! This trait covers everything the reconciler and exporter need from GitHub:
//! - Listing teams, team members and team repositories (paginated)
//! - The tolerant per-repository role lookup
//! - Team, membership and repository-access mutations

use async_trait::async_trait;

use crate::client::models::{CreateTeamRequest, Member, Team, TeamRepo, UpdateTeamRequest};
use crate::error::Result;

/// Team management operations for the GitHub REST API
#[async_trait]
pub trait TeamApi: Send + Sync {
    // ========================================================================
    // Read Operations
    // ========================================================================

    /// List all teams in the organization, following every page.
    async fn list_teams(&self, org: &str) -> Result<Vec<Team>>;

    /// List all members of a team, following every page.
    async fn list_team_members(&self, org: &str, team_slug: &str) -> Result<Vec<Member>>;

    /// List all repositories a team has access to, following every page.
    async fn list_team_repos(&self, org: &str, team_slug: &str) -> Result<Vec<TeamRepo>>;

    /// Look up a team's access to one repository.
    ///
    /// Returns `Ok(None)` on 404, which is GitHub's answer for "no access".
    /// Any status other than 200 or 404 is an error.
    async fn get_team_repo(
        &self,
        org: &str,
        team_slug: &str,
        owner: &str,
        repo: &str,
    ) -> Result<Option<TeamRepo>>;

    // ========================================================================
    // Write Operations
    // ========================================================================

    /// Create a team. GitHub assigns the slug.
    async fn create_team(&self, org: &str, request: &CreateTeamRequest) -> Result<()>;

    /// Update a team's description.
    async fn update_team(
        &self,
        org: &str,
        team_slug: &str,
        request: &UpdateTeamRequest,
    ) -> Result<()>;

    /// Add a user to a team with the `member` role.
    async fn add_team_member(&self, org: &str, team_slug: &str, username: &str) -> Result<()>;

    /// Remove a user from a team.
    async fn remove_team_member(&self, org: &str, team_slug: &str, username: &str)
    -> Result<()>;

    /// Grant or change a team's permission on a repository.
    ///
    /// `permission` is in API vocabulary (`pull`, `push`, ...).
    async fn set_team_repo_permission(
        &self,
        org: &str,
        team_slug: &str,
        owner: &str,
        repo: &str,
        permission: &str,
    ) -> Result<()>;

    /// Remove a team's access to a repository.
    async fn remove_team_repo(
        &self,
        org: &str,
        team_slug: &str,
        owner: &str,
        repo: &str,
    ) -> Result<()>;
}
