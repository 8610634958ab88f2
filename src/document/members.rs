//! Organization member list
//!
//! A plain YAML sequence of usernames:
//!
//! ```yaml
//! - alice
//! - bob
//! ```

use std::collections::HashSet;
use std::path::Path;

use crate::error::Result;

use super::{read_file, with_path};

/// Usernames that should belong to the organization, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberList {
    pub usernames: Vec<String>,
}

impl MemberList {
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = read_file(path)?;
        Self::parse(&contents).map_err(|err| with_path(path, err))
    }

    /// Parse a member list. Repeated usernames (ignoring case) keep their
    /// first occurrence.
    pub fn parse(contents: &str) -> Result<Self> {
        let raw: Option<Vec<String>> = serde_yaml::from_str(contents)?;

        let mut seen = HashSet::new();
        let usernames = raw
            .unwrap_or_default()
            .into_iter()
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .filter(|u| seen.insert(u.to_lowercase()))
            .collect();

        Ok(Self { usernames })
    }
}
