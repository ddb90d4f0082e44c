//! File-backed source for demo mode and local development
//!
//! The file mirrors what the cluster would report:
//!
//! ```yaml
//! groups: "dev, ops"
//! ingresses:
//!   - annotations:
//!       dashboard.home/enabled: "true"
//!       dashboard.home/title: Grafana
//!       dashboard.home/groups: "ops, admins"
//! ```
//!
//! `groups` stands in for the groups of a logged-in user, since there is no
//! proxy in front of the portal in this mode.

use crate::apps::CallerGroups;
use crate::source::{Endpoint, RecordSource, SourceRecord};
use crate::{PortalError, Result};
use async_trait::async_trait;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// URL given to every static application, which has no routing information.
pub const PLACEHOLDER_URL: &str = "https://example.com";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StaticConfig {
    #[serde(default)]
    pub groups: Option<String>,

    #[serde(default)]
    pub ingresses: Vec<StaticIngress>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StaticIngress {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub namespace: Option<String>,

    #[serde(default, deserialize_with = "scalar_annotations")]
    pub annotations: BTreeMap<String, String>,
}

/// Accept plain YAML scalars (`enabled: true`) as annotation values, taking
/// their literal text the way the Kubernetes API would store them.
fn scalar_annotations<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<BTreeMap<String, Value>>::deserialize(deserializer)?.unwrap_or_default();

    raw.into_iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(s) => s,
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                Value::Null => String::new(),
                _ => {
                    return Err(D::Error::custom(format!(
                        "annotation {} must be a scalar value",
                        key
                    )))
                }
            };
            Ok((key, value))
        })
        .collect()
}

impl StaticConfig {
    pub fn from_yaml(path: &Path, contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(contents).map_err(|e| PortalError::MalformedSource {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Records in document order.
    pub fn records(&self) -> Vec<SourceRecord> {
        self.ingresses
            .iter()
            .enumerate()
            .map(|(i, ingress)| SourceRecord {
                namespace: ingress.namespace.clone().unwrap_or_default(),
                name: ingress
                    .name
                    .clone()
                    .unwrap_or_else(|| format!("ingress-{}", i)),
                annotations: ingress.annotations.clone(),
                endpoint: Endpoint::Fixed(PLACEHOLDER_URL.to_string()),
            })
            .collect()
    }

    pub fn caller_groups(&self) -> CallerGroups {
        CallerGroups::parse(self.groups.as_deref().unwrap_or_default())
    }
}

/// Reads the first readable file of an ordered list of candidate paths
#[derive(Debug, Clone)]
pub struct StaticSource {
    paths: Vec<PathBuf>,
}

impl StaticSource {
    pub fn new(primary: impl Into<PathBuf>, fallback: impl Into<PathBuf>) -> Self {
        Self {
            paths: vec![primary.into(), fallback.into()],
        }
    }

    /// Read and parse the file. A path that cannot be read falls through to
    /// the next one; a file that reads but does not parse is an error.
    pub async fn load(&self) -> Result<StaticConfig> {
        let mut failures = Vec::new();

        for path in &self.paths {
            match tokio::fs::read_to_string(path).await {
                Ok(contents) => {
                    debug!("Loaded static config from {}", path.display());
                    return StaticConfig::from_yaml(path, &contents);
                }
                Err(e) => {
                    debug!("Cannot read {}: {}", path.display(), e);
                    failures.push(format!("{}: {}", path.display(), e));
                }
            }
        }

        Err(PortalError::SourceUnavailable(format!(
            "no readable config file ({})",
            failures.join("; ")
        )))
    }

    /// Groups of the simulated user. Loading problems are logged and leave
    /// the demo user without groups.
    pub async fn load_demo_groups(&self) -> CallerGroups {
        match self.load().await {
            Ok(config) => {
                let groups = config.caller_groups();
                if !groups.is_empty() {
                    info!("Demo mode enabled with groups: {:?}", groups.as_slice());
                }
                groups
            }
            Err(e) => {
                warn!("Failed to load demo groups config: {}", e);
                CallerGroups::default()
            }
        }
    }
}

#[async_trait]
impl RecordSource for StaticSource {
    async fn list_records(&self) -> Result<Vec<SourceRecord>> {
        let config = self.load().await?;

        info!(
            "Demo mode: loading {} ingress configs from file",
            config.ingresses.len()
        );

        Ok(config.records())
    }

    fn name(&self) -> &str {
        "static"
    }
}
