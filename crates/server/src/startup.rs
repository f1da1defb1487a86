use std::net::SocketAddr;

use axum::Router;
use common::utils::logging::init_logging;
use configs::{AppConfig, StorageBackend};
use dotenvy::dotenv;
use migration::MigratorTrait;
use service::{Repositories, Services};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Pick the storage backend and build the service graph on top of it.
pub async fn build_services(cfg: &AppConfig) -> Result<Services, StartupError> {
    match cfg.storage.backend {
        StorageBackend::Memory => {
            warn!("using in-memory storage; data is lost on restart");
            Ok(Services::new(Repositories::in_memory()))
        }
        StorageBackend::Postgres => {
            let db_cfg = models::db::DatabaseConfig::from(&cfg.database);
            let db = models::db::connect_with_config(&db_cfg)
                .await
                .map_err(|e| StartupError::Database(e.to_string()))?;
            if cfg.database.run_migrations {
                migration::Migrator::up(&db, None)
                    .await
                    .map_err(|e| StartupError::Database(format!("migrations failed: {e}")))?;
                info!("migrations applied");
            }
            Ok(Services::new(Repositories::sea_orm(db)))
        }
    }
}

/// Router with CORS and tracing over the given state.
pub fn build_app(state: AppState) -> Router {
    routes::build_router(state, build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl_c");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Public entry: load config, build the app and serve until Ctrl+C.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    let cfg = AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    init_logging(&cfg.logging.format);

    let services = build_services(&cfg).await?;
    let app = build_app(AppState::new(services, cfg.pagination));

    let listener = TcpListener::bind(cfg.server.bind_addr()).await?;
    let addr: SocketAddr = listener.local_addr()?;
    info!(%addr, backend = ?cfg.storage.backend, "restaurant platform listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}
