//! Repository roles and the legacy permission vocabulary

use std::fmt;

use serde::{Serialize, Serializer};

/// A team's role on a repository, in desired-state vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Read,
    Triage,
    Write,
    Maintain,
    Admin,
}

impl Role {
    /// All roles, lowest to highest.
    pub const ALL: [Role; 5] = [
        Role::Read,
        Role::Triage,
        Role::Write,
        Role::Maintain,
        Role::Admin,
    ];

    /// Parse a desired-state role name. Only the document vocabulary is accepted.
    pub fn parse(value: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.as_str() == value)
    }

    /// Interpret a role reported by the API.
    ///
    /// GitHub reports `role_name` in the modern vocabulary but the `permission`
    /// field and permission flags in the legacy one, so both are accepted.
    pub fn from_live(value: &str) -> Option<Role> {
        match value {
            "pull" => Some(Role::Read),
            "push" => Some(Role::Write),
            other => Role::parse(other),
        }
    }

    /// Name used in the desired-state document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Read => "read",
            Role::Triage => "triage",
            Role::Write => "write",
            Role::Maintain => "maintain",
            Role::Admin => "admin",
        }
    }

    /// Name the API expects when granting this role.
    pub fn api_permission(&self) -> &'static str {
        match self {
            Role::Read => "pull",
            Role::Write => "push",
            other => other.as_str(),
        }
    }

    /// Whether a live role string denotes this role.
    pub fn matches_live(&self, live: &str) -> bool {
        Role::from_live(live) == Some(*self)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
