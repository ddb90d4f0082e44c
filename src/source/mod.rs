//! Backing stores for portal applications
//!
//! A source lists records carrying annotation bags. The cluster source reads
//! Ingresses from the Kubernetes API; the static source reads a YAML file for
//! demo and local development. Both return records in a stable order so the
//! filtered output keeps the order in which entries were discovered.

pub mod cluster;
pub mod static_file;

use crate::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;

pub use cluster::ClusterSource;
pub use static_file::{StaticConfig, StaticSource, PLACEHOLDER_URL};

#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Do a fresh listing of every record in the backing store.
    async fn list_records(&self) -> Result<Vec<SourceRecord>>;

    fn name(&self) -> &str;
}

/// An ingress-like object as seen by the mapper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRecord {
    pub namespace: String,
    pub name: String,
    pub annotations: BTreeMap<String, String>,
    pub endpoint: Endpoint,
}

/// Where an application is reached
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Routing of a live ingress; `None` when it has no rules.
    Ingress(Option<IngressRoute>),
    /// A fixed address, used when no routing information exists.
    Fixed(String),
}

/// Host of the first ingress rule and whether the ingress terminates TLS
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngressRoute {
    pub host: String,
    pub tls: bool,
}

impl Endpoint {
    pub fn url(&self) -> String {
        match self {
            Endpoint::Ingress(Some(route)) => {
                let scheme = if route.tls { "https" } else { "http" };
                format!("{}://{}", scheme, route.host)
            }
            Endpoint::Ingress(None) => String::new(),
            Endpoint::Fixed(url) => url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tls_route_uses_https() {
        let endpoint = Endpoint::Ingress(Some(IngressRoute {
            host: "app.example.com".to_string(),
            tls: true,
        }));
        assert_eq!(endpoint.url(), "https://app.example.com");
    }

    #[test]
    fn test_plain_route_uses_http() {
        let endpoint = Endpoint::Ingress(Some(IngressRoute {
            host: "app.example.com".to_string(),
            tls: false,
        }));
        assert_eq!(endpoint.url(), "http://app.example.com");
    }

    #[test]
    fn test_no_rules_gives_empty_url() {
        assert_eq!(Endpoint::Ingress(None).url(), "");
    }

    #[test]
    fn test_fixed_url_passes_through() {
        let endpoint = Endpoint::Fixed(PLACEHOLDER_URL.to_string());
        assert_eq!(endpoint.url(), "https://example.com");
    }
}
