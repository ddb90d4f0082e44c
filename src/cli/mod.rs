pub mod commands;

use crate::apps::CallerGroups;
use crate::config::{
    Mode, PortalConfig, DEFAULT_CONFIG_PATH, DEFAULT_GROUP_HEADER, DEFAULT_PORT,
    DEFAULT_STATIC_DIR, FALLBACK_CONFIG_PATH,
};
use crate::source::StaticSource;
use crate::{PortalError, Result};
use axum::http::HeaderName;
use clap::{Parser, Subcommand};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kube-portal")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Lists annotated Kubernetes ingresses for an application portal",
    long_about = None
)]
pub struct Cli {
    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        env = "LOG_LEVEL",
        default_value = "info",
        help = "Log level when RUST_LOG is unset"
    )]
    pub log_level: String,

    #[arg(
        long,
        global = true,
        env = "DEMO_MODE",
        help = "Read applications and user groups from the config file instead of the cluster"
    )]
    pub demo: bool,

    #[arg(
        long,
        global = true,
        env = "PORTAL_CONFIG",
        default_value = DEFAULT_CONFIG_PATH,
        help = "Demo config file"
    )]
    pub config: PathBuf,

    #[arg(
        long,
        global = true,
        env = "PORTAL_FALLBACK_CONFIG",
        default_value = FALLBACK_CONFIG_PATH,
        help = "Demo config file used when --config cannot be read"
    )]
    pub fallback_config: PathBuf,

    #[arg(
        long,
        global = true,
        env = "PORTAL_GROUP_HEADER",
        default_value = DEFAULT_GROUP_HEADER,
        help = "Request header carrying the caller's comma-separated groups"
    )]
    pub group_header: String,

    #[arg(
        short,
        long,
        global = true,
        env = "PORT",
        default_value_t = DEFAULT_PORT,
        help = "Listen port"
    )]
    pub port: u16,

    #[arg(
        long,
        global = true,
        env = "PORTAL_BIND",
        default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        help = "Listen address"
    )]
    pub bind: IpAddr,

    #[arg(
        long,
        global = true,
        env = "PORTAL_STATIC_DIR",
        default_value = DEFAULT_STATIC_DIR,
        help = "Directory of the portal UI assets"
    )]
    pub static_dir: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the HTTP server (default)")]
    Serve,
    #[command(about = "Print the applications visible to a set of groups as JSON")]
    Apps {
        #[arg(short, long, help = "Comma-separated groups of the simulated caller")]
        groups: Option<String>,
    },
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.demo {
            Mode::Static
        } else {
            Mode::Cluster
        }
    }

    /// Build the process-wide configuration. In demo mode this reads the
    /// demo user's groups from the config file.
    pub async fn portal_config(&self) -> Result<PortalConfig> {
        HeaderName::from_bytes(self.group_header.as_bytes()).map_err(|e| {
            PortalError::ConfigError(format!(
                "invalid group header {:?}: {}",
                self.group_header, e
            ))
        })?;

        let mode = self.mode();
        let demo_groups = match mode {
            Mode::Static => {
                StaticSource::new(self.config.clone(), self.fallback_config.clone())
                    .load_demo_groups()
                    .await
            }
            Mode::Cluster => CallerGroups::default(),
        };

        Ok(PortalConfig {
            mode,
            demo_groups,
            group_header: self.group_header.clone(),
            config_path: self.config.clone(),
            fallback_config_path: self.fallback_config.clone(),
            static_dir: self.static_dir.clone(),
            listen_addr: SocketAddr::new(self.bind, self.port),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["kube-portal"]).unwrap();

        assert!(cli.command.is_none());
        assert_eq!(cli.mode(), Mode::Cluster);
        assert_eq!(cli.group_header, "X-Forwarded-Groups");
        assert_eq!(cli.config, PathBuf::from("/etc/dashboard/config.yaml"));
        assert_eq!(cli.fallback_config, PathBuf::from("config.yaml"));
    }

    #[test]
    fn test_apps_subcommand_with_groups() {
        let cli =
            Cli::try_parse_from(["kube-portal", "apps", "--groups", "dev,ops", "--demo"]).unwrap();

        assert_eq!(cli.mode(), Mode::Static);
        match cli.command {
            Some(Commands::Apps { groups }) => assert_eq!(groups.as_deref(), Some("dev,ops")),
            _ => panic!("expected apps subcommand"),
        }
    }

    #[tokio::test]
    async fn test_portal_config_listen_addr() {
        let cli =
            Cli::try_parse_from(["kube-portal", "--port", "9000", "--bind", "127.0.0.1"]).unwrap();
        let config = cli.portal_config().await.unwrap();

        assert_eq!(config.listen_addr, SocketAddr::from(([127, 0, 0, 1], 9000)));
        assert!(config.demo_groups.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_group_header_is_rejected() {
        let cli = Cli::try_parse_from(["kube-portal", "--group-header", "bad header"]).unwrap();
        let err = cli.portal_config().await.unwrap_err();
        assert!(matches!(err, PortalError::ConfigError(_)));
    }
}
