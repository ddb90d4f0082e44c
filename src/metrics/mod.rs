pub mod collector;
pub mod exporter;

pub use collector::PortalMetrics;
pub use exporter::render;
