use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use sender::config::{load_config, validate_config, ServerConfig};
use sender::lifecycle::signals::spawn_ctrl_c;
use sender::observability::init_logging;
use sender::routes::demo_router;
use sender::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "sender")]
#[command(about = "Demo server for Sender-shaped responses", long_about = None)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
        validate_config(&config).map_err(sender::config::ConfigError::Validation)?;
    }

    init_logging(&config.observability)?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        redirect_status = config.response.redirect_status,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    spawn_ctrl_c(shutdown.clone());

    let server = HttpServer::new(config, demo_router());
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
