use crate::source::{Endpoint, IngressRoute, SourceRecord};
use k8s_openapi::api::networking::v1::Ingress;

impl SourceRecord {
    pub fn from_k8s_ingress(ingress: &Ingress) -> Self {
        let metadata = &ingress.metadata;
        let spec = ingress.spec.as_ref();

        let tls = spec
            .and_then(|s| s.tls.as_ref())
            .map(|tls| !tls.is_empty())
            .unwrap_or(false);

        let route = spec
            .and_then(|s| s.rules.as_ref())
            .and_then(|rules| rules.first())
            .map(|rule| IngressRoute {
                host: rule.host.clone().unwrap_or_default(),
                tls,
            });

        Self {
            namespace: metadata.namespace.clone().unwrap_or_default(),
            name: metadata.name.clone().unwrap_or_default(),
            annotations: metadata.annotations.clone().unwrap_or_default(),
            endpoint: Endpoint::Ingress(route),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apps::map_record;
    use k8s_openapi::api::networking::v1::{IngressRule, IngressSpec, IngressTLS};
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
    use std::collections::BTreeMap;

    fn ingress(hosts: &[&str], tls: bool) -> Ingress {
        let annotations: BTreeMap<String, String> = [
            ("dashboard.home/enabled", "true"),
            ("dashboard.home/title", "App"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let rules = hosts
            .iter()
            .map(|h| IngressRule {
                host: Some(h.to_string()),
                ..Default::default()
            })
            .collect::<Vec<_>>();

        Ingress {
            metadata: ObjectMeta {
                name: Some("app".to_string()),
                namespace: Some("default".to_string()),
                annotations: Some(annotations),
                ..Default::default()
            },
            spec: Some(IngressSpec {
                rules: if rules.is_empty() { None } else { Some(rules) },
                tls: tls.then(|| {
                    vec![IngressTLS {
                        hosts: Some(hosts.iter().map(|h| h.to_string()).collect()),
                        secret_name: Some("app-tls".to_string()),
                    }]
                }),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_tls_ingress_url() {
        let record = SourceRecord::from_k8s_ingress(&ingress(&["app.example.com"], true));
        assert_eq!(record.endpoint.url(), "https://app.example.com");
        assert_eq!(map_record(&record).unwrap().url, "https://app.example.com");
    }

    #[test]
    fn test_plain_ingress_url() {
        let record = SourceRecord::from_k8s_ingress(&ingress(&["app.example.com"], false));
        assert_eq!(record.endpoint.url(), "http://app.example.com");
    }

    #[test]
    fn test_ingress_without_rules_has_empty_url() {
        let record = SourceRecord::from_k8s_ingress(&ingress(&[], false));
        assert_eq!(record.endpoint, Endpoint::Ingress(None));
        assert_eq!(map_record(&record).unwrap().url, "");
    }

    #[test]
    fn test_first_rule_host_wins() {
        let ingress = ingress(&["a.example.com", "b.example.com"], true);
        let record = SourceRecord::from_k8s_ingress(&ingress);
        assert_eq!(record.endpoint.url(), "https://a.example.com");
    }

    #[test]
    fn test_metadata_is_copied() {
        let record = SourceRecord::from_k8s_ingress(&ingress(&["app.example.com"], false));
        assert_eq!(record.namespace, "default");
        assert_eq!(record.name, "app");
        assert_eq!(
            record.annotations.get("dashboard.home/title").map(String::as_str),
            Some("App")
        );
    }

    #[test]
    fn test_bare_ingress_has_no_annotations() {
        let record = SourceRecord::from_k8s_ingress(&Ingress::default());
        assert!(record.annotations.is_empty());
        assert!(map_record(&record).is_none());
    }
}
