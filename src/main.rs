use clap::Parser;
use kube_portal::cli::{commands, Cli};
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(cli.log_level.to_lowercase()))
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting kube-portal v{}", kube_portal::VERSION);

    if let Err(e) = commands::handle_command(cli).await {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
