use axum::Router;
use configs::{AppConfig, ServerConfig};
use migration::MigratorTrait;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

async fn bind(server: &ServerConfig) -> anyhow::Result<TcpListener> {
    let listener = TcpListener::bind((server.host.as_str(), server.port)).await?;
    Ok(listener)
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
    }
}

/// Serve `app` on `listener` until Ctrl+C.
pub async fn serve(listener: TcpListener, app: Router) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    info!(%addr, "bike store api listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Public entry: connect the database, migrate, build the app and run the HTTP server.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database).await?;

    if cfg.database.auto_migrate {
        migration::Migrator::up(&db, None)
            .await
            .map_err(|e| StartupError::Migration(e.to_string()))?;
        info!(event = "migrated", "database schema up to date");
    }

    let state = AppState::from_db(db);
    let app = routes::build_router(state, build_cors());

    let listener = bind(&cfg.server).await.map_err(|e| {
        StartupError::InvalidConfig(format!("cannot bind {}:{}: {}", cfg.server.host, cfg.server.port, e))
    })?;
    serve(listener, app).await
}
