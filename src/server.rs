//! HTTP server entry point.
//!
//! Wires the database and router together and runs the axum serve loop with
//! graceful ctrl-c shutdown.

use anyhow::Result;

use crate::config::RecsvcConfig;
use crate::db;
use crate::http::{self, AppState};

/// Open the database and serve the recommendation API until interrupted.
pub async fn serve(config: RecsvcConfig) -> Result<()> {
    let db_path = config.resolved_db_path();
    let conn = db::open_database(&db_path)?;
    tracing::info!(db = %db_path.display(), "database ready");

    let state = AppState::new(conn);
    let router = http::router(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "recommendation service listening at http://{bind_addr}");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("failed to listen for ctrl-c");
            tracing::info!("shutting down");
        })
        .await?;

    Ok(())
}
