//! Request orchestration: fetch records, map them, filter for the caller

use crate::apps::{filter_visible, map_record, Application, CallerGroups};
use crate::config::{Mode, PortalConfig};
use crate::source::{ClusterSource, RecordSource, StaticSource};
use crate::Result;
use std::sync::Arc;
use tracing::{debug, info};

/// Applications shown to one caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    /// Enabled applications before group filtering.
    pub discovered: usize,
    pub apps: Vec<Application>,
}

pub struct Portal {
    config: Arc<PortalConfig>,
    source: Arc<dyn RecordSource>,
}

impl Portal {
    pub fn new(config: Arc<PortalConfig>, source: Arc<dyn RecordSource>) -> Self {
        Self { config, source }
    }

    /// Build the portal with the source selected by the configured mode.
    pub fn from_config(config: Arc<PortalConfig>) -> Self {
        let source: Arc<dyn RecordSource> = match config.mode {
            Mode::Cluster => Arc::new(ClusterSource::new()),
            Mode::Static => Arc::new(StaticSource::new(
                config.config_path.clone(),
                config.fallback_config_path.clone(),
            )),
        };

        Self::new(config, source)
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Caller context for a request: the demo groups in static mode,
    /// otherwise the value of the trust header.
    pub fn caller_groups(&self, header: Option<&str>) -> CallerGroups {
        if self.config.mode == Mode::Static {
            debug!("Using demo mode groups");
            return self.config.demo_groups.clone();
        }

        CallerGroups::parse(header.unwrap_or_default())
    }

    /// Every enabled application, in discovery order.
    pub async fn applications(&self) -> Result<Vec<Application>> {
        let records = self.source.list_records().await?;
        let apps: Vec<Application> = records.iter().filter_map(map_record).collect();

        info!(
            "{} source: {} records, {} apps enabled",
            self.source.name(),
            records.len(),
            apps.len()
        );

        Ok(apps)
    }

    pub async fn visible_applications(&self, caller: &CallerGroups) -> Result<Listing> {
        let apps = self.applications().await?;
        let discovered = apps.len();
        let apps = filter_visible(apps, caller);

        info!("Apps response: total={} filtered={}", discovered, apps.len());

        Ok(Listing { discovered, apps })
    }
}
