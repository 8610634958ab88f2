//! Organization membership API trait

use async_trait::async_trait;

use crate::client::models::{Invitation, InvitationRequest, Member};
use crate::error::Result;

/// Organization membership and invitation operations
#[async_trait]
pub trait OrgApi: Send + Sync {
    /// List all organization members, following every page.
    async fn list_org_members(&self, org: &str) -> Result<Vec<Member>>;

    /// List pending organization invitations, following every page.
    async fn list_org_invitations(&self, org: &str) -> Result<Vec<Invitation>>;

    /// Look up a user account by login.
    async fn get_user(&self, login: &str) -> Result<Member>;

    /// Invite a user to the organization.
    async fn create_invitation(&self, org: &str, request: &InvitationRequest) -> Result<()>;
}
