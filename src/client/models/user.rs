//! User and invitation models

use serde::{Deserialize, Serialize};

/// A GitHub account, as listed by team and organization member endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub login: String,

    #[serde(default)]
    pub id: u64,
}

/// Pending organization invitation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invitation {
    pub id: u64,

    /// Invitee login (absent for email invitations)
    #[serde(default)]
    pub login: Option<String>,

    #[serde(default)]
    pub email: Option<String>,
}

/// Request body for `POST /orgs/{org}/invitations`
#[derive(Debug, Clone, Serialize)]
pub struct InvitationRequest {
    pub invitee_id: u64,
    pub role: String,
}

impl InvitationRequest {
    pub fn direct_member(invitee_id: u64) -> Self {
        Self {
            invitee_id,
            role: "direct_member".to_string(),
        }
    }
}
