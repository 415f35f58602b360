use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;
use tokio::{net::TcpListener, signal};
use tracing::{error, info};
use weather_core::{Config, provider_from_config};
use weather_server::{AppState, create_router};

/// Top-level CLI struct. Flags override the config file.
#[derive(Debug, Parser)]
#[command(name = "weather-server", version, about = "Weather summary HTTP server")]
pub struct Cli {
    /// Config file path; defaults to the platform config directory.
    #[arg(long, env = "WEATHER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Port to listen on [default: 8080]. An empty value counts as unset.
    #[arg(long, env = "PORT")]
    pub port: Option<String>,

    /// OpenWeather API key.
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Provider base URL, e.g. for a local mock.
    #[arg(long, env = "OPENWEATHER_BASE_URL")]
    pub base_url: Option<String>,
}

impl Cli {
    /// Merge the config file (or defaults) with flags and environment.
    pub fn into_config(self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        let port = self.port.as_deref().map(str::trim).unwrap_or_default();
        if !port.is_empty() {
            let port = port
                .parse()
                .with_context(|| format!("Invalid port: {port}"))?;
            config = config.with_port(port);
        }
        if let Some(api_key) = self.api_key {
            config = config.with_api_key(api_key);
        }
        if let Some(base_url) = self.base_url {
            config = config.with_base_url(base_url);
        }

        Ok(config)
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let config = self.into_config()?;
        let provider = provider_from_config(&config)?;
        let app = create_router(AppState::new(Arc::from(provider)));

        let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind to {addr}"))?;

        info!("Server running on port: {}", config.port);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server shut down");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
