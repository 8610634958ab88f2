//! Live state to desired-state document

use crate::client::TeamApi;
use crate::document::{Document, RepoPermission, TeamSpec};
use crate::error::Result;

use super::fetcher::{Fetcher, TeamState};

/// Fetch every team with its members and repository access.
pub async fn fetch_all<C: TeamApi + ?Sized>(fetcher: &Fetcher<'_, C>) -> Result<Vec<TeamState>> {
    let mut states = Vec::new();
    for team in fetcher.teams().await? {
        states.push(fetcher.full_team_state(&team).await?);
    }
    Ok(states)
}

/// Convert live state into a document that reconciles to no changes.
///
/// Members are sorted case-insensitively and repos by name so the output is
/// stable across runs.
pub fn to_document(states: &[TeamState]) -> Document {
    let teams = states
        .iter()
        .filter_map(|state| {
            let team = state.team.as_ref()?;

            let mut members = state.members.clone();
            members.sort_by_key(|m| m.to_lowercase());

            let mut permissions: Vec<RepoPermission> = state
                .repos
                .iter()
                .filter_map(|repo| {
                    repo.effective_role().map(|role| RepoPermission {
                        repo: repo.name.clone(),
                        role: Some(role),
                    })
                })
                .collect();
            permissions.sort_by_key(|p| p.repo.to_lowercase());

            Some(TeamSpec {
                name: team.name.clone(),
                description: Some(team.description.clone().unwrap_or_default()),
                members: Some(members),
                permissions,
            })
        })
        .collect();

    Document { teams }
}

/// Fetch live state and render it as a document.
pub async fn export<C: TeamApi + ?Sized>(fetcher: &Fetcher<'_, C>) -> Result<Document> {
    let states = fetch_all(fetcher).await?;
    Ok(to_document(&states))
}
