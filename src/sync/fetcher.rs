//! Live state retrieval

use log::debug;

use crate::client::TeamApi;
use crate::client::models::{Team, TeamRepo};
use crate::error::Result;
use crate::output::Reporter;

/// A team as it exists on GitHub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveTeam {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

impl From<Team> for LiveTeam {
    fn from(team: Team) -> Self {
        Self {
            name: team.name,
            slug: team.slug,
            description: team.description,
        }
    }
}

/// Live membership and repository access of one team.
///
/// `team` is `None` for a team that does not exist yet; its members and
/// repos are then empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamState {
    pub team: Option<LiveTeam>,
    pub members: Vec<String>,
    pub repos: Vec<TeamRepo>,
}

impl TeamState {
    /// State of a team that has not been created.
    pub fn unborn() -> Self {
        Self::default()
    }

    /// Role the team currently holds on `repo`, in whatever vocabulary
    /// GitHub reported it. `None` means no access.
    pub fn live_role(&self, repo: &str) -> Option<String> {
        self.repos
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(repo))
            .and_then(TeamRepo::live_role)
    }
}

/// Reads organization state from GitHub.
pub struct Fetcher<'a, C: TeamApi + ?Sized> {
    client: &'a C,
    org: &'a str,
    reporter: &'a Reporter,
}

impl<'a, C: TeamApi + ?Sized> Fetcher<'a, C> {
    pub fn new(client: &'a C, org: &'a str, reporter: &'a Reporter) -> Self {
        Self {
            client,
            org,
            reporter,
        }
    }

    /// All teams in the organization.
    pub async fn teams(&self) -> Result<Vec<LiveTeam>> {
        self.reporter
            .progress(format!("GET /orgs/{}/teams", self.org));
        let teams = self.client.list_teams(self.org).await?;
        debug!("Organization {} has {} team(s)", self.org, teams.len());
        Ok(teams.into_iter().map(LiveTeam::from).collect())
    }

    /// Member logins of a team.
    pub async fn members(&self, team: &LiveTeam) -> Result<Vec<String>> {
        self.reporter.progress(format!(
            "GET /orgs/{}/teams/{}/members",
            self.org, team.slug
        ));
        let members = self.client.list_team_members(self.org, &team.slug).await?;
        Ok(members.into_iter().map(|m| m.login).collect())
    }

    /// Members plus access to the listed repos, using the tolerant per-repo
    /// lookup so that "no access" is not an error.
    pub async fn team_state(&self, team: &LiveTeam, repos: &[&str]) -> Result<TeamState> {
        let members = self.members(team).await?;

        let mut access = Vec::new();
        for repo in repos {
            self.reporter.progress(format!(
                "GET /orgs/{}/teams/{}/repos/{}/{}",
                self.org, team.slug, self.org, repo
            ));
            match self
                .client
                .get_team_repo(self.org, &team.slug, self.org, repo)
                .await?
            {
                Some(found) => access.push(found),
                None => debug!("Team {} has no access to {}", team.slug, repo),
            }
        }

        Ok(TeamState {
            team: Some(team.clone()),
            members,
            repos: access,
        })
    }

    /// Members plus every repository the team can access.
    pub async fn full_team_state(&self, team: &LiveTeam) -> Result<TeamState> {
        let members = self.members(team).await?;

        self.reporter.progress(format!(
            "GET /orgs/{}/teams/{}/repos",
            self.org, team.slug
        ));
        let repos = self.client.list_team_repos(self.org, &team.slug).await?;

        Ok(TeamState {
            team: Some(team.clone()),
            members,
            repos,
        })
    }
}
