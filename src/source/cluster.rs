use crate::k8s::K8sClient;
use crate::source::{RecordSource, SourceRecord};
use crate::Result;
use async_trait::async_trait;
use tracing::debug;

/// Lists Ingresses from the Kubernetes API
///
/// A client is built for every listing so a credential or connectivity
/// failure only fails the request that hit it.
#[derive(Debug, Default)]
pub struct ClusterSource;

impl ClusterSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RecordSource for ClusterSource {
    async fn list_records(&self) -> Result<Vec<SourceRecord>> {
        let client = K8sClient::try_default().await?;
        let ingresses = client.list_ingresses().await?;

        let records: Vec<SourceRecord> = ingresses
            .iter()
            .map(SourceRecord::from_k8s_ingress)
            .collect();

        debug!("Cluster source produced {} records", records.len());

        Ok(records)
    }

    fn name(&self) -> &str {
        "cluster"
    }
}
