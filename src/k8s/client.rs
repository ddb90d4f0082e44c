use crate::{PortalError, Result};
use k8s_openapi::api::networking::v1::Ingress;
use kube::{Api, Client};
use tracing::{debug, info};

pub struct K8sClient {
    client: Client,
}

impl K8sClient {
    /// Connect using the ambient identity: the in-cluster service account,
    /// or the local kubeconfig outside a cluster.
    pub async fn try_default() -> Result<Self> {
        debug!("Initializing Kubernetes client");

        let client = Client::try_default().await.map_err(|e| {
            PortalError::SourceUnavailable(format!("Failed to create K8s client: {}", e))
        })?;

        debug!("Kubernetes client ready");

        Ok(Self { client })
    }

    pub fn ingresses_all(&self) -> Api<Ingress> {
        Api::all(self.client.clone())
    }

    /// List ingresses across all namespaces, in API order.
    pub async fn list_ingresses(&self) -> Result<Vec<Ingress>> {
        let ingress_list = self
            .ingresses_all()
            .list(&Default::default())
            .await
            .map_err(|e| {
                PortalError::SourceUnavailable(format!("Failed to list ingresses: {}", e))
            })?;

        info!("Found {} total ingresses", ingress_list.items.len());

        Ok(ingress_list.items)
    }
}
