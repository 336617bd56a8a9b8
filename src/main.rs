use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use agri_connect_server::{config::Config, db, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agri_connect_server=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env()?;

    let pool = db::init_db_pool(&config.database_url)
        .await
        .context("failed to initialize database")?;

    let state = AppState::new(pool);
    let app = routes::router(state);

    let addr = config.server_addr();
    tracing::info!("Starting Agri-Connect server on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutting down");
}
