//! Desired vs. live comparison
//!
//! Pure functions: given typed desired and live state, produce the ordered
//! list of mutations. Nothing here talks to GitHub.
//!
//! Ordering is deterministic so dry-run output is reproducible:
//! team creations first (document order), then per team in document order
//! description, member additions, member removals, repository access.

use std::collections::HashSet;

use crate::document::TeamSpec;

use super::fetcher::{LiveTeam, TeamState};
use super::intent::{MutationIntent, TeamRef};

fn member_key(login: &str) -> String {
    login.to_lowercase()
}

/// `CreateTeam` for every desired team missing from the organization.
///
/// Live-only teams are left alone; the document is a lower bound.
pub fn plan_creates(desired: &[TeamSpec], live: &[LiveTeam]) -> Vec<MutationIntent> {
    let existing: HashSet<&str> = live.iter().map(|t| t.name.as_str()).collect();

    desired
        .iter()
        .filter(|spec| !existing.contains(spec.name.as_str()))
        .map(|spec| MutationIntent::CreateTeam {
            name: spec.name.clone(),
            description: spec.desired_description().map(str::to_string),
        })
        .collect()
}

/// Mutations that bring one existing (or about to exist) team in line.
pub fn plan_team(desired: &TeamSpec, state: &TeamState) -> Vec<MutationIntent> {
    let team = TeamRef {
        name: desired.name.clone(),
        slug: state.team.as_ref().map(|t| t.slug.clone()),
    };
    let mut intents = Vec::new();

    // A team created in this run already got its description.
    if let (Some(live), Some(description)) = (&state.team, desired.desired_description()) {
        if live.description.as_deref() != Some(description) {
            intents.push(MutationIntent::UpdateDescription {
                team: team.clone(),
                description: description.to_string(),
            });
        }
    }

    if let Some(members) = &desired.members {
        plan_members(&team, members, state, &mut intents);
    }

    for permission in &desired.permissions {
        let live_role = state.live_role(&permission.repo);
        match (permission.role, live_role) {
            (None, None) => {}
            (None, Some(_)) => intents.push(MutationIntent::RevokeRepoRole {
                team: team.clone(),
                repo: permission.repo.clone(),
            }),
            (Some(role), Some(live)) if role.matches_live(&live) => {}
            (Some(role), _) => intents.push(MutationIntent::GrantOrChangeRepoRole {
                team: team.clone(),
                repo: permission.repo.clone(),
                role,
                permission: role.api_permission(),
            }),
        }
    }

    intents
}

/// Membership additions (document order) then removals (sorted).
fn plan_members(
    team: &TeamRef,
    members: &[String],
    state: &TeamState,
    intents: &mut Vec<MutationIntent>,
) {
    let live_members: HashSet<String> = state.members.iter().map(|m| member_key(m)).collect();
    let mut desired_members = HashSet::new();
    for username in members {
        let key = member_key(username);
        if !desired_members.insert(key.clone()) {
            continue;
        }
        if !live_members.contains(&key) {
            intents.push(MutationIntent::AddMember {
                team: team.clone(),
                username: username.clone(),
            });
        }
    }

    let mut removals: Vec<&String> = state
        .members
        .iter()
        .filter(|m| !desired_members.contains(&member_key(m)))
        .collect();
    removals.sort_by_key(|m| member_key(m));
    for username in removals {
        intents.push(MutationIntent::RemoveMember {
            team: team.clone(),
            username: username.clone(),
        });
    }
}

/// Full plan against a complete live snapshot.
///
/// Teams that are created by this plan are treated as empty. The live run
/// interleaves fetching and applying instead (see [`super::reconcile`]).
#[cfg(test)]
pub fn plan(desired: &[TeamSpec], live: &[TeamState]) -> Vec<MutationIntent> {
    let live_teams: Vec<LiveTeam> = live.iter().filter_map(|s| s.team.clone()).collect();
    let mut intents = plan_creates(desired, &live_teams);

    let unborn = TeamState::unborn();
    for spec in desired {
        let state = live
            .iter()
            .find(|s| s.team.as_ref().is_some_and(|t| t.name == spec.name))
            .unwrap_or(&unborn);
        intents.extend(plan_team(spec, state));
    }

    intents
}
