pub mod apps;
pub mod cli;
pub mod config;
pub mod error;
pub mod k8s;
pub mod metrics;
pub mod portal;
pub mod server;
pub mod source;

pub use error::{PortalError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
