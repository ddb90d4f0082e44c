use crate::apps::CallerGroups;
use crate::cli::{Cli, Commands};
use crate::config::PortalConfig;
use crate::metrics::PortalMetrics;
use crate::portal::Portal;
use crate::server::{self, AppState};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

pub async fn handle_command(cli: Cli) -> Result<()> {
    let config = Arc::new(
        cli.portal_config()
            .await
            .context("invalid configuration")?,
    );

    info!("Portal mode: {}", config.mode);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => handle_serve(config).await,
        Commands::Apps { groups } => handle_apps(config, groups).await,
    }
}

async fn handle_serve(config: Arc<PortalConfig>) -> Result<()> {
    let metrics = PortalMetrics::new().context("failed to create metrics registry")?;
    let state = Arc::new(AppState::new(Portal::from_config(config), metrics));

    server::serve(state).await.context("server error")?;
    Ok(())
}

async fn handle_apps(config: Arc<PortalConfig>, groups: Option<String>) -> Result<()> {
    let portal = Portal::from_config(config);

    let caller = match groups.as_deref() {
        Some(groups) => CallerGroups::parse(groups),
        None => portal.caller_groups(None),
    };
    info!("Listing apps for groups: {:?}", caller.as_slice());

    let listing = portal
        .visible_applications(&caller)
        .await
        .context("failed to fetch apps")?;

    println!("{}", serde_json::to_string_pretty(&listing.apps)?);
    Ok(())
}
