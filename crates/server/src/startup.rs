use std::future::Future;

use axum::Router;
use common::env::{ensure_db_dir, shutdown_signal};
use configs::{AppConfig, DatabaseConfig};
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Open (and migrate) the store, then assemble the router around it.
///
/// The returned connection is the same pool the router uses; close it once
/// the server has stopped.
pub async fn build_app(db_cfg: &DatabaseConfig) -> anyhow::Result<(Router, DatabaseConnection)> {
    ensure_db_dir(&db_cfg.url).await?;
    let db = models::db::connect_and_migrate(db_cfg).await?;
    let state = ServerState::new(db.clone());
    Ok((routes::build_router(state, build_cors()), db))
}

/// Serve on an already-bound listener until `shutdown` resolves, then close the pool.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    db: DatabaseConnection,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    info!(%addr, "company service listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    db.close().await?;
    info!("database connection closed");
    Ok(())
}

/// Public entry: build the app from `cfg` and serve until Ctrl+C / SIGTERM.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let (app, db) = build_app(&cfg.database).await?;
    let listener = TcpListener::bind(cfg.server.bind_addr()).await?;
    serve(listener, app, db, shutdown_signal()).await
}
