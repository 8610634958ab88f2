//! GitHub REST API client

pub mod api;
pub mod github;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;

pub use api::{OrgApi, TeamApi};
pub use github::GitHubClient;
#[cfg(test)]
pub use mock::MockGitHubClient;

