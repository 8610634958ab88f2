//! Mutation execution

use log::debug;

use crate::client::TeamApi;
use crate::client::models::{CreateTeamRequest, UpdateTeamRequest};
use crate::error::{ApiError, Result};
use crate::output::Reporter;

use super::intent::{MutationIntent, TeamRef};

/// Applies mutation intents, or only reports them under dry-run.
pub struct Executor<'a, C: TeamApi + ?Sized> {
    client: &'a C,
    org: &'a str,
    dry_run: bool,
    reporter: &'a Reporter,
}

impl<'a, C: TeamApi + ?Sized> Executor<'a, C> {
    pub fn new(client: &'a C, org: &'a str, dry_run: bool, reporter: &'a Reporter) -> Self {
        Self {
            client,
            org,
            dry_run,
            reporter,
        }
    }

    /// Apply intents in order, stopping at the first failure.
    pub async fn apply_all(&self, intents: &[MutationIntent]) -> Result<()> {
        for intent in intents {
            self.apply(intent).await?;
        }
        Ok(())
    }

    /// Apply a single intent.
    pub async fn apply(&self, intent: &MutationIntent) -> Result<()> {
        self.reporter.action(intent);

        let (method, path) = self.endpoint(intent);
        if self.dry_run {
            self.reporter.dry_run(method, path);
            return Ok(());
        }
        debug!("{} {} (team {})", method, path, intent.team_name());

        let org = self.org;
        match intent {
            MutationIntent::CreateTeam { name, description } => {
                let request = CreateTeamRequest::new(name.clone(), description.clone());
                self.client.create_team(org, &request).await
            }
            MutationIntent::UpdateDescription { team, description } => {
                let request = UpdateTeamRequest {
                    description: description.clone(),
                };
                self.client.update_team(org, slug(team)?, &request).await
            }
            MutationIntent::AddMember { team, username } => {
                self.client
                    .add_team_member(org, slug(team)?, username)
                    .await
            }
            MutationIntent::RemoveMember { team, username } => {
                self.client
                    .remove_team_member(org, slug(team)?, username)
                    .await
            }
            MutationIntent::GrantOrChangeRepoRole {
                team,
                repo,
                permission,
                ..
            } => {
                self.client
                    .set_team_repo_permission(org, slug(team)?, org, repo, permission)
                    .await
            }
            MutationIntent::RevokeRepoRole { team, repo } => {
                self.client
                    .remove_team_repo(org, slug(team)?, org, repo)
                    .await
            }
        }
    }

    /// HTTP method and path an intent maps to, for reporting.
    fn endpoint(&self, intent: &MutationIntent) -> (&'static str, String) {
        let org = self.org;
        match intent {
            MutationIntent::CreateTeam { .. } => ("POST", format!("/orgs/{}/teams", org)),
            MutationIntent::UpdateDescription { team, .. } => (
                "PATCH",
                format!("/orgs/{}/teams/{}", org, team.path_segment()),
            ),
            MutationIntent::AddMember { team, username } => (
                "PUT",
                format!(
                    "/orgs/{}/teams/{}/memberships/{}",
                    org,
                    team.path_segment(),
                    username
                ),
            ),
            MutationIntent::RemoveMember { team, username } => (
                "DELETE",
                format!(
                    "/orgs/{}/teams/{}/memberships/{}",
                    org,
                    team.path_segment(),
                    username
                ),
            ),
            MutationIntent::GrantOrChangeRepoRole { team, repo, .. } => (
                "PUT",
                format!(
                    "/orgs/{}/teams/{}/repos/{}/{}",
                    org,
                    team.path_segment(),
                    org,
                    repo
                ),
            ),
            MutationIntent::RevokeRepoRole { team, repo } => (
                "DELETE",
                format!(
                    "/orgs/{}/teams/{}/repos/{}/{}",
                    org,
                    team.path_segment(),
                    org,
                    repo
                ),
            ),
        }
    }
}

fn slug(team: &TeamRef) -> Result<&str> {
    team.slug
        .as_deref()
        .ok_or_else(|| ApiError::UnresolvedTeam(team.name.clone()).into())
}
