//! Mutation intents emitted by the reconciler

use std::fmt;

use crate::document::Role;

/// A team targeted by a mutation.
///
/// `slug` is `None` only for teams that do not exist yet, which can happen
/// when planning under dry-run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRef {
    pub name: String,
    pub slug: Option<String>,
}

impl TeamRef {
    /// Identifier used in API paths and reports.
    pub fn path_segment(&self) -> &str {
        self.slug.as_deref().unwrap_or(&self.name)
    }
}

/// One API mutation needed to move live state toward desired state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationIntent {
    CreateTeam {
        name: String,
        description: Option<String>,
    },
    UpdateDescription {
        team: TeamRef,
        description: String,
    },
    AddMember {
        team: TeamRef,
        username: String,
    },
    RemoveMember {
        team: TeamRef,
        username: String,
    },
    /// `permission` is the role translated to API vocabulary
    GrantOrChangeRepoRole {
        team: TeamRef,
        repo: String,
        role: Role,
        permission: &'static str,
    },
    RevokeRepoRole {
        team: TeamRef,
        repo: String,
    },
}

impl MutationIntent {
    /// Team name this intent applies to.
    pub fn team_name(&self) -> &str {
        match self {
            MutationIntent::CreateTeam { name, .. } => name,
            MutationIntent::UpdateDescription { team, .. }
            | MutationIntent::AddMember { team, .. }
            | MutationIntent::RemoveMember { team, .. }
            | MutationIntent::GrantOrChangeRepoRole { team, .. }
            | MutationIntent::RevokeRepoRole { team, .. } => &team.name,
        }
    }
}

impl fmt::Display for MutationIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MutationIntent::CreateTeam { name, .. } => write!(f, "Creating `{}` team", name),
            MutationIntent::UpdateDescription { team, .. } => {
                write!(f, "Updating `{}` description", team.name)
            }
            MutationIntent::AddMember { team, username } => {
                write!(f, "Adding `{}` to `{}`", username, team.name)
            }
            MutationIntent::RemoveMember { team, username } => {
                write!(f, "Removing `{}` from `{}`", username, team.name)
            }
            MutationIntent::GrantOrChangeRepoRole {
                team, repo, role, ..
            } => write!(f, "Granting `{}` {} access to `{}`", team.name, role, repo),
            MutationIntent::RevokeRepoRole { team, repo } => {
                write!(f, "Revoking `{}` access to `{}`", team.name, repo)
            }
        }
    }
}
