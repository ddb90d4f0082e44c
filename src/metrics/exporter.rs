use crate::metrics::collector::PortalMetrics;
use prometheus::{Encoder, TextEncoder};

/// Render the registry in the Prometheus text exposition format.
pub fn render(metrics: &PortalMetrics) -> prometheus::Result<String> {
    let mut buffer = Vec::new();
    TextEncoder::new().encode(&metrics.registry().gather(), &mut buffer)?;

    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
}

pub const CONTENT_TYPE: &str = prometheus::TEXT_FORMAT;
