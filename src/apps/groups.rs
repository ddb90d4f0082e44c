//! Group-based visibility
//!
//! Visibility is a set-intersection test between the groups an application
//! lists and the groups of the caller. Both sides are trimmed and compared
//! case-insensitively. This is a display filter only; access control is
//! enforced by the proxy in front of the portal.

use crate::apps::mapper::GROUP_DELIMITER;
use crate::apps::Application;

/// Groups of the user behind the current request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallerGroups {
    groups: Vec<String>,
}

impl CallerGroups {
    pub fn new(groups: Vec<String>) -> Self {
        Self { groups }
    }

    /// Parse a comma-separated list, as sent by the proxy or written in the
    /// demo config. Elements are trimmed; blank elements are kept, so only an
    /// empty value yields a caller without groups.
    pub fn parse(value: &str) -> Self {
        if value.is_empty() {
            return Self::default();
        }

        let groups = value
            .split(GROUP_DELIMITER)
            .map(|g| g.trim().to_string())
            .collect();

        Self { groups }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.groups
    }
}

fn group_eq(a: &str, b: &str) -> bool {
    a.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .eq(b.trim().chars().flat_map(char::to_lowercase))
}

/// Decide whether an application with `app_groups` is shown to `caller`.
///
/// A caller without groups sees everything, and an application without
/// groups is shown to everyone.
pub fn is_visible(app_groups: &[String], caller: &CallerGroups) -> bool {
    if caller.is_empty() || app_groups.is_empty() {
        return true;
    }

    app_groups
        .iter()
        .any(|app_group| caller.groups.iter().any(|g| group_eq(app_group, g)))
}

/// Keep the applications visible to `caller`, in their original order.
pub fn filter_visible(mut apps: Vec<Application>, caller: &CallerGroups) -> Vec<Application> {
    apps.retain(|app| is_visible(&app.groups, caller));
    apps
}
