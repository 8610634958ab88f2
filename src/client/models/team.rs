//! Team models

use serde::{Deserialize, Serialize};

/// Organization team as returned by `GET /orgs/{org}/teams`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Numeric team ID
    pub id: u64,

    /// Display name (unique within the organization)
    pub name: String,

    /// URL-safe identifier assigned by GitHub at creation time
    pub slug: String,

    /// Team description (null when never set)
    #[serde(default)]
    pub description: Option<String>,
}

/// Request body for `POST /orgs/{org}/teams`
#[derive(Debug, Clone, Serialize)]
pub struct CreateTeamRequest {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Visibility; teams are always created `closed` (visible to org members)
    pub privacy: String,
}

impl CreateTeamRequest {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            description,
            privacy: "closed".to_string(),
        }
    }
}

/// Request body for `PATCH /orgs/{org}/teams/{slug}`
#[derive(Debug, Clone, Serialize)]
pub struct UpdateTeamRequest {
    pub description: String,
}

/// Request body for `PUT /orgs/{org}/teams/{slug}/memberships/{username}`
#[derive(Debug, Clone, Serialize)]
pub struct MembershipRequest {
    pub role: String,
}

impl Default for MembershipRequest {
    fn default() -> Self {
        Self {
            role: "member".to_string(),
        }
    }
}
