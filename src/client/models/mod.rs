//! GitHub REST API data models
//!
//! Wire types deserialized from API responses and serialized into request
//! bodies. They are converted to domain types by the sync layer.

pub mod repo;
pub mod team;
pub mod user;

pub use repo::{RepoPermissionRequest, TeamRepo};
pub use team::{CreateTeamRequest, MembershipRequest, Team, UpdateTeamRequest};
pub use user::{Invitation, InvitationRequest, Member};
