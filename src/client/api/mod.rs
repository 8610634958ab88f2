//! API trait definitions split by responsibility
//!
//! - [`TeamApi`] - Teams, team membership and team repository access
//! - [`OrgApi`] - Organization membership and invitations

mod org;
mod team;

pub use org::OrgApi;
pub use team::TeamApi;
