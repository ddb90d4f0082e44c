use crate::apps::CallerGroups;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_CONFIG_PATH: &str = "/etc/dashboard/config.yaml";
pub const FALLBACK_CONFIG_PATH: &str = "config.yaml";
pub const DEFAULT_GROUP_HEADER: &str = "X-Forwarded-Groups";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Applications come from live Ingresses; groups from the proxy header.
    Cluster,
    /// Applications and the user's groups come from a local file.
    Static,
}

impl Mode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Mode::Cluster => "cluster",
            Mode::Static => "static",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Process-wide settings, decided once at startup and never mutated
#[derive(Debug, Clone)]
pub struct PortalConfig {
    pub mode: Mode,
    /// Groups of the simulated user in static mode.
    pub demo_groups: CallerGroups,
    pub group_header: String,
    pub config_path: PathBuf,
    pub fallback_config_path: PathBuf,
    pub static_dir: PathBuf,
    pub listen_addr: SocketAddr,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Cluster,
            demo_groups: CallerGroups::default(),
            group_header: DEFAULT_GROUP_HEADER.to_string(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            fallback_config_path: PathBuf::from(FALLBACK_CONFIG_PATH),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            listen_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
        }
    }
}
