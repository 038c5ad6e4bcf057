use std::error::Error;

use lunch_server::config::{API_KEY_VAR, ServerConfig};
use lunch_server::lookup::LunchFinder;
use lunch_server::maps::MapsClient;
use lunch_server::web::{AppState, LEGACY_LUNCH_PLACES_PATH, LUNCH_PLACES_PATH, create_router};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    let config = ServerConfig::from_env()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.as_str()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let state = match config.maps_config() {
        Some(maps_config) => {
            let client = MapsClient::new(maps_config)?;
            AppState::new(LunchFinder::new(client, config.lookup_config()))
        }
        None => {
            warn!("{API_KEY_VAR} not set; lookups will answer with a configuration error");
            AppState::unconfigured()
        }
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(
        addr = %config.bind_addr,
        target_count = config.target_count,
        "lunch places server listening"
    );
    info!("endpoints: GET /health, GET {LUNCH_PLACES_PATH}, GET {LEGACY_LUNCH_PLACES_PATH}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("received shutdown signal, starting graceful shutdown");
}
