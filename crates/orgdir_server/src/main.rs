//! Directory server entry point.
//!
//! Reads configuration from the environment, opens the store, and serves the
//! API router. Every setting has a local-development default.

use log::info;
use orgdir_server::{router, AppState};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let level = std::env::var("ORGDIR_LOG")
        .unwrap_or_else(|_| orgdir_core::default_log_level().to_string());
    let log_dir = std::env::var("ORGDIR_LOG_DIR").ok();
    orgdir_core::init_logging(&level, log_dir.as_deref())?;

    let db_path = std::env::var("ORGDIR_DB").unwrap_or_else(|_| "orgdir.db".to_string());
    let bind_addr = std::env::var("ORGDIR_ADDR").unwrap_or_else(|_| "127.0.0.1:5000".to_string());

    let conn = orgdir_core::db::open_db(&db_path)?;
    let app = router(AppState::new(conn));

    info!(
        "event=server_start module=api status=ok addr={bind_addr} db={db_path} version={}",
        orgdir_core::core_version()
    );

    let listener = TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
