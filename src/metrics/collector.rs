use prometheus::{
    register_histogram_with_registry, register_int_counter_vec_with_registry,
    register_int_counter_with_registry, Histogram, IntCounter, IntCounterVec, Registry,
};
use std::time::Duration;

/// Counters for the apps endpoint
///
/// Cloning shares the underlying metrics.
#[derive(Clone)]
pub struct PortalMetrics {
    registry: Registry,
    requests_total: IntCounterVec,
    fetch_duration: Histogram,
    discovered_total: IntCounter,
    served_total: IntCounter,
}

impl PortalMetrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new_custom(Some("portal".to_string()), None)?;

        #[cfg(target_os = "linux")]
        registry.register(Box::new(
            prometheus::process_collector::ProcessCollector::for_self(),
        ))?;

        let requests_total = register_int_counter_vec_with_registry!(
            "apps_requests_total",
            "Requests to the apps endpoint by outcome",
            &["outcome"],
            registry
        )?;
        let fetch_duration = register_histogram_with_registry!(
            "apps_fetch_duration_seconds",
            "Time spent listing and mapping source records",
            registry
        )?;
        let discovered_total = register_int_counter_with_registry!(
            "apps_discovered_total",
            "Enabled applications found across all requests",
            registry
        )?;
        let served_total = register_int_counter_with_registry!(
            "apps_served_total",
            "Applications returned to callers after group filtering",
            registry
        )?;

        Ok(Self {
            registry,
            requests_total,
            fetch_duration,
            discovered_total,
            served_total,
        })
    }

    pub fn record_success(&self, elapsed: Duration, discovered: usize, served: usize) {
        self.requests_total.with_label_values(&["ok"]).inc();
        self.fetch_duration.observe(elapsed.as_secs_f64());
        self.discovered_total.inc_by(discovered as u64);
        self.served_total.inc_by(served as u64);
    }

    pub fn record_failure(&self, elapsed: Duration) {
        self.requests_total.with_label_values(&["error"]).inc();
        self.fetch_duration.observe(elapsed.as_secs_f64());
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcomes_are_counted_separately() {
        let metrics = PortalMetrics::new().unwrap();

        metrics.record_success(Duration::from_millis(5), 3, 2);
        metrics.record_success(Duration::from_millis(5), 3, 1);
        metrics.record_failure(Duration::from_millis(1));

        assert_eq!(metrics.requests_total.with_label_values(&["ok"]).get(), 2);
        assert_eq!(metrics.requests_total.with_label_values(&["error"]).get(), 1);
        assert_eq!(metrics.discovered_total.get(), 6);
        assert_eq!(metrics.served_total.get(), 3);
        assert_eq!(metrics.fetch_duration.get_sample_count(), 3);
    }
}
