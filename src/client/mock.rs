//! Mock GitHub API client for testing
//!
//! Holds an in-memory organization that mutations actually modify, so a test
//! can reconcile, then reconcile again and observe the second run is a no-op.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::{OrgApi, TeamApi};
use super::models::repo::RepoOwner;
use super::models::{
    CreateTeamRequest, Invitation, InvitationRequest, Member, Team, TeamRepo, UpdateTeamRequest,
};
use crate::error::{ApiError, Result};

/// A team in the mock organization
#[derive(Debug, Clone)]
struct MockTeam {
    team: Team,
    members: Vec<String>,
    repos: Vec<TeamRepo>,
}

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockGitHubClient::new("acme")
///     .with_team("Core", "Core maintainers", &["alice"], &[("numpy", "write")])
///     .await;
///
/// let teams = mock.list_teams("acme").await?;
/// assert_eq!(teams.len(), 1);
/// ```
pub struct MockGitHubClient {
    org: String,
    teams: Arc<Mutex<Vec<MockTeam>>>,
    org_members: Arc<Mutex<Vec<Member>>>,
    invitations: Arc<Mutex<Vec<Invitation>>>,
    users: Arc<Mutex<Vec<Member>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Mutating requests, in the order they were made
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub list_teams: usize,
    pub list_team_members: usize,
    pub list_team_repos: usize,
    pub get_team_repo: usize,
    pub list_org_members: usize,
    pub list_org_invitations: usize,
    pub get_user: usize,
    pub mutations: usize,
}

/// A captured mutating API request for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRequest {
    /// The API method called (e.g., "add_team_member")
    pub method: String,
    /// Positional arguments after the org, e.g. `["core", "alice"]`
    pub args: Vec<String>,
}

impl CapturedRequest {
    fn new(method: &str, args: &[&str]) -> Self {
        Self {
            method: method.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Derive a slug the way GitHub does for simple names.
fn slugify(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}

impl MockGitHubClient {
    /// Create a mock for an empty organization.
    pub fn new(org: &str) -> Self {
        Self {
            org: org.to_string(),
            teams: Arc::new(Mutex::new(Vec::new())),
            org_members: Arc::new(Mutex::new(Vec::new())),
            invitations: Arc::new(Mutex::new(Vec::new())),
            users: Arc::new(Mutex::new(Vec::new())),
            error: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(CallCounts::default())),
            captured_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a live team with members and `(repo, role_name)` access.
    pub async fn with_team(
        self,
        name: &str,
        description: &str,
        members: &[&str],
        repos: &[(&str, &str)],
    ) -> Self {
        let id = self.teams.lock().await.len() as u64 + 1;
        let team = MockTeam {
            team: Team {
                id,
                name: name.to_string(),
                slug: slugify(name),
                description: Some(description.to_string()),
            },
            members: members.iter().map(|m| m.to_string()).collect(),
            repos: repos
                .iter()
                .map(|(repo, role)| self.team_repo(repo, Some(*role)))
                .collect(),
        };
        self.teams.lock().await.push(team);
        self
    }

    /// Configure organization members.
    pub async fn with_org_members(self, logins: &[&str]) -> Self {
        *self.org_members.lock().await = logins
            .iter()
            .enumerate()
            .map(|(i, login)| Member {
                login: login.to_string(),
                id: i as u64 + 1,
            })
            .collect();
        self
    }

    /// Configure pending invitations by login.
    pub async fn with_invitations(self, logins: &[&str]) -> Self {
        *self.invitations.lock().await = logins
            .iter()
            .enumerate()
            .map(|(i, login)| Invitation {
                id: i as u64 + 1,
                login: Some(login.to_string()),
                email: None,
            })
            .collect();
        self
    }

    /// Configure user accounts resolvable by `get_user`.
    pub async fn with_users(self, users: &[(&str, u64)]) -> Self {
        *self.users.lock().await = users
            .iter()
            .map(|(login, id)| Member {
                login: login.to_string(),
                id: *id,
            })
            .collect();
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get all captured mutating requests.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// Current members of a team, by name.
    pub async fn members_of(&self, team_name: &str) -> Vec<String> {
        self.teams
            .lock()
            .await
            .iter()
            .find(|t| t.team.name == team_name)
            .map(|t| t.members.clone())
            .unwrap_or_default()
    }

    fn team_repo(&self, repo: &str, role: Option<&str>) -> TeamRepo {
        TeamRepo {
            name: repo.to_string(),
            owner: Some(RepoOwner {
                login: self.org.clone(),
            }),
            role_name: role.map(str::to_string),
            permissions: None,
        }
    }

    async fn check_error(&self) -> Result<()> {
        let mut error = self.error.lock().await;
        if let Some(e) = error.take() {
            return Err(e.into());
        }
        Ok(())
    }

    async fn record(&self, request: CapturedRequest) -> Result<()> {
        self.check_error().await?;
        self.call_count.lock().await.mutations += 1;
        self.captured_requests.lock().await.push(request);
        Ok(())
    }

    async fn with_team_mut<F>(&self, slug: &str, f: F) -> Result<()>
    where
        F: FnOnce(&mut MockTeam),
    {
        let mut teams = self.teams.lock().await;
        let team = teams
            .iter_mut()
            .find(|t| t.team.slug == slug)
            .ok_or_else(|| ApiError::Remote {
                url: format!("/orgs/{}/teams/{}", self.org, slug),
                message: "Not Found".to_string(),
            })?;
        f(team);
        Ok(())
    }

    async fn find_team(&self, slug: &str) -> Result<MockTeam> {
        self.teams
            .lock()
            .await
            .iter()
            .find(|t| t.team.slug == slug)
            .cloned()
            .ok_or_else(|| {
                ApiError::Remote {
                    url: format!("/orgs/{}/teams/{}", self.org, slug),
                    message: "Not Found".to_string(),
                }
                .into()
            })
    }
}

#[async_trait]
impl TeamApi for MockGitHubClient {
    async fn list_teams(&self, _org: &str) -> Result<Vec<Team>> {
        self.check_error().await?;
        self.call_count.lock().await.list_teams += 1;

        let teams = self.teams.lock().await;
        Ok(teams.iter().map(|t| t.team.clone()).collect())
    }

    async fn list_team_members(&self, _org: &str, team_slug: &str) -> Result<Vec<Member>> {
        self.check_error().await?;
        self.call_count.lock().await.list_team_members += 1;

        let team = self.find_team(team_slug).await?;
        Ok(team
            .members
            .into_iter()
            .enumerate()
            .map(|(i, login)| Member {
                login,
                id: i as u64 + 1,
            })
            .collect())
    }

    async fn list_team_repos(&self, _org: &str, team_slug: &str) -> Result<Vec<TeamRepo>> {
        self.check_error().await?;
        self.call_count.lock().await.list_team_repos += 1;

        Ok(self.find_team(team_slug).await?.repos)
    }

    async fn get_team_repo(
        &self,
        _org: &str,
        team_slug: &str,
        _owner: &str,
        repo: &str,
    ) -> Result<Option<TeamRepo>> {
        self.check_error().await?;
        self.call_count.lock().await.get_team_repo += 1;

        let team = self.find_team(team_slug).await?;
        Ok(team.repos.into_iter().find(|r| r.name == repo))
    }

    async fn create_team(&self, _org: &str, request: &CreateTeamRequest) -> Result<()> {
        self.record(CapturedRequest::new("create_team", &[request.name.as_str()]))
            .await?;

        let mut teams = self.teams.lock().await;
        let id = teams.len() as u64 + 1;
        teams.push(MockTeam {
            team: Team {
                id,
                name: request.name.clone(),
                slug: slugify(&request.name),
                description: request.description.clone(),
            },
            members: Vec::new(),
            repos: Vec::new(),
        });
        Ok(())
    }

    async fn update_team(
        &self,
        _org: &str,
        team_slug: &str,
        request: &UpdateTeamRequest,
    ) -> Result<()> {
        self.record(CapturedRequest::new(
            "update_team",
            &[team_slug, request.description.as_str()],
        ))
        .await?;

        let description = request.description.clone();
        self.with_team_mut(team_slug, |t| t.team.description = Some(description))
            .await
    }

    async fn add_team_member(&self, _org: &str, team_slug: &str, username: &str) -> Result<()> {
        self.record(CapturedRequest::new("add_team_member", &[team_slug, username]))
            .await?;

        let username = username.to_string();
        self.with_team_mut(team_slug, |t| {
            if !t.members.iter().any(|m| m.eq_ignore_ascii_case(&username)) {
                t.members.push(username);
            }
        })
        .await
    }

    async fn remove_team_member(
        &self,
        _org: &str,
        team_slug: &str,
        username: &str,
    ) -> Result<()> {
        self.record(CapturedRequest::new(
            "remove_team_member",
            &[team_slug, username],
        ))
        .await?;

        self.with_team_mut(team_slug, |t| {
            t.members.retain(|m| !m.eq_ignore_ascii_case(username))
        })
        .await
    }

    async fn set_team_repo_permission(
        &self,
        _org: &str,
        team_slug: &str,
        _owner: &str,
        repo: &str,
        permission: &str,
    ) -> Result<()> {
        self.record(CapturedRequest::new(
            "set_team_repo_permission",
            &[team_slug, repo, permission],
        ))
        .await?;

        // GitHub reports the granted role back in its modern vocabulary.
        let role_name = match permission {
            "push" => "write",
            "pull" => "read",
            other => other,
        };
        let entry = self.team_repo(repo, Some(role_name));
        self.with_team_mut(team_slug, |t| {
            t.repos.retain(|r| r.name != entry.name);
            t.repos.push(entry);
        })
        .await
    }

    async fn remove_team_repo(
        &self,
        _org: &str,
        team_slug: &str,
        _owner: &str,
        repo: &str,
    ) -> Result<()> {
        self.record(CapturedRequest::new("remove_team_repo", &[team_slug, repo]))
            .await?;

        self.with_team_mut(team_slug, |t| t.repos.retain(|r| r.name != repo))
            .await
    }
}

#[async_trait]
impl OrgApi for MockGitHubClient {
    async fn list_org_members(&self, _org: &str) -> Result<Vec<Member>> {
        self.check_error().await?;
        self.call_count.lock().await.list_org_members += 1;
        Ok(self.org_members.lock().await.clone())
    }

    async fn list_org_invitations(&self, _org: &str) -> Result<Vec<Invitation>> {
        self.check_error().await?;
        self.call_count.lock().await.list_org_invitations += 1;
        Ok(self.invitations.lock().await.clone())
    }

    async fn get_user(&self, login: &str) -> Result<Member> {
        self.check_error().await?;
        self.call_count.lock().await.get_user += 1;

        self.users
            .lock()
            .await
            .iter()
            .find(|u| u.login.eq_ignore_ascii_case(login))
            .cloned()
            .ok_or_else(|| {
                ApiError::Remote {
                    url: format!("/users/{}", login),
                    message: "Not Found".to_string(),
                }
                .into()
            })
    }

    async fn create_invitation(&self, _org: &str, request: &InvitationRequest) -> Result<()> {
        let invitee = request.invitee_id.to_string();
        self.record(CapturedRequest::new("create_invitation", &[invitee.as_str()]))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client_default_empty() {
        let mock = MockGitHubClient::new("acme");

        let teams = mock.list_teams("acme").await.unwrap();
        assert!(teams.is_empty());
        assert!(mock.captured_requests().await.is_empty());
    }

    #[tokio::test]
    async fn test_mock_client_with_team() {
        let mock = MockGitHubClient::new("acme")
            .with_team("Core Devs", "Core", &["alice"], &[("numpy", "write")])
            .await;

        let teams = mock.list_teams("acme").await.unwrap();
        assert_eq!(teams[0].slug, "core-devs");

        let repo = mock
            .get_team_repo("acme", "core-devs", "acme", "numpy")
            .await
            .unwrap();
        assert_eq!(repo.unwrap().role_name.as_deref(), Some("write"));

        let missing = mock
            .get_team_repo("acme", "core-devs", "acme", "scipy")
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_mock_client_with_error() {
        let mock = MockGitHubClient::new("acme")
            .with_error(ApiError::Network("boom".to_string()))
            .await;

        assert!(mock.list_teams("acme").await.is_err());
        // Error is consumed after first use
        assert!(mock.list_teams("acme").await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_mutations_update_state() {
        let mock = MockGitHubClient::new("acme");
        mock.create_team("acme", &CreateTeamRequest::new("Docs", None))
            .await
            .unwrap();
        mock.add_team_member("acme", "docs", "bob").await.unwrap();

        assert_eq!(mock.members_of("Docs").await, vec!["bob"]);
        assert_eq!(mock.call_counts().await.mutations, 2);
    }
}
