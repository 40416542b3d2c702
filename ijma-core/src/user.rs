//! Users and the annotator display-name lookup.
//!
//! Authentication is the collaborator's concern; this crate only models the
//! directory data the analysis needs (ids, display names, roles).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// User role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Workflow administrator.
    Admin,
    /// Labeling annotator.
    #[default]
    Annotator,
}

/// A user directory entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store document id.
    pub id: String,
    /// Display name, used in reports and CSV column slugs.
    pub name: String,
    /// Login name (email).
    #[serde(default)]
    pub username: String,
    /// Role.
    #[serde(default)]
    pub role: Role,
}

/// Annotator id → display name lookup.
///
/// Reports never show raw user ids when a name is known; unknown ids fall
/// back to the id itself so partially-fetched directories degrade gracefully.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    names: HashMap<String, String>,
}

impl UserDirectory {
    /// Empty directory; every lookup falls back to the raw id.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from user records.
    #[must_use]
    pub fn from_users(users: &[User]) -> Self {
        users
            .iter()
            .map(|u| (u.id.clone(), u.name.clone()))
            .collect()
    }

    /// Register or replace one mapping.
    pub fn insert(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.names.insert(id.into(), name.into());
    }

    /// Display name for `id`, falling back to `id` when unknown.
    #[must_use]
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.names.get(id).map_or(id, String::as_str)
    }

    /// Number of known mappings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the directory has no mappings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(String, String)> for UserDirectory {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_raw_id() {
        let mut directory = UserDirectory::new();
        directory.insert("u1", "Aisyah Putri");
        assert_eq!(directory.display_name("u1"), "Aisyah Putri");
        assert_eq!(directory.display_name("u2"), "u2");
    }

    #[test]
    fn builds_from_user_records() {
        let users = vec![
            User {
                id: "u1".into(),
                name: "Aisyah Putri".into(),
                ..User::default()
            },
            User {
                id: "u2".into(),
                name: "Budi Santoso".into(),
                ..User::default()
            },
        ];
        let directory = UserDirectory::from_users(&users);
        assert_eq!(directory.len(), 2);
        assert_eq!(directory.display_name("u2"), "Budi Santoso");
    }
}
