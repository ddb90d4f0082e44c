//! Applications shown on the portal
//!
//! An [`Application`] is built from the annotations of a source record by the
//! mapper and narrowed per caller by the group matcher.

pub mod groups;
pub mod mapper;

use serde::{Deserialize, Serialize};

pub use groups::{filter_visible, is_visible, CallerGroups};
pub use mapper::{map_annotations, map_record};

/// A single portal entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub title: String,
    pub icon: String,
    pub url: String,
    /// Groups entitled to see the entry; empty means everyone.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<String>,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_json_fields() {
        let app = Application {
            title: "Grafana".to_string(),
            icon: "https://example.com/grafana.svg".to_string(),
            url: "https://grafana.example.com".to_string(),
            groups: vec!["ops".to_string()],
            description: "Dashboards".to_string(),
        };

        let value = serde_json::to_value(&app).unwrap();
        assert_eq!(value["title"], "Grafana");
        assert_eq!(value["url"], "https://grafana.example.com");
        assert_eq!(value["groups"], serde_json::json!(["ops"]));
        assert_eq!(value["description"], "Dashboards");
    }

    #[test]
    fn test_application_without_groups_omits_field() {
        let app = Application {
            title: "Wiki".to_string(),
            icon: String::new(),
            url: String::new(),
            groups: Vec::new(),
            description: String::new(),
        };

        let value = serde_json::to_value(&app).unwrap();
        assert!(value.get("groups").is_none());
    }
}
