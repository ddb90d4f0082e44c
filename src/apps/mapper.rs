//! Annotation bag to [`Application`] translation

use crate::apps::Application;
use crate::source::SourceRecord;
use std::collections::BTreeMap;
use tracing::debug;

pub const ENABLED_ANNOTATION: &str = "dashboard.home/enabled";
pub const TITLE_ANNOTATION: &str = "dashboard.home/title";
pub const ICON_ANNOTATION: &str = "dashboard.home/icon";
pub const DESCRIPTION_ANNOTATION: &str = "dashboard.home/description";
pub const GROUPS_ANNOTATION: &str = "dashboard.home/groups";

/// The only value of the enabled annotation that publishes a record.
pub const ENABLED_VALUE: &str = "true";

pub const GROUP_DELIMITER: char = ',';

/// Map a source record, deriving the URL from its endpoint.
///
/// Returns `None` when the record is not enabled for the portal.
pub fn map_record(record: &SourceRecord) -> Option<Application> {
    let app = map_annotations(&record.annotations, record.endpoint.url());

    match &app {
        Some(app) => debug!(
            "Mapped {}/{} -> title={:?} groups={:?}",
            record.namespace, record.name, app.title, app.groups
        ),
        None => debug!("Skipping {}/{}: not enabled", record.namespace, record.name),
    }

    app
}

pub fn map_annotations(annotations: &BTreeMap<String, String>, url: String) -> Option<Application> {
    if annotations.get(ENABLED_ANNOTATION).map(String::as_str) != Some(ENABLED_VALUE) {
        return None;
    }

    let get = |key: &str| annotations.get(key).cloned().unwrap_or_default();

    Some(Application {
        title: get(TITLE_ANNOTATION),
        icon: get(ICON_ANNOTATION),
        url,
        groups: split_groups(annotations.get(GROUPS_ANNOTATION).map(String::as_str)),
        description: get(DESCRIPTION_ANNOTATION),
    })
}

/// Elements keep their surrounding whitespace; the matcher trims at compare time.
fn split_groups(value: Option<&str>) -> Vec<String> {
    match value {
        Some(v) if !v.is_empty() => v.split(GROUP_DELIMITER).map(str::to_string).collect(),
        _ => Vec::new(),
    }
}
