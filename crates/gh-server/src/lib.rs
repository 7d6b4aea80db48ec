//! gh-server: HTTP layer for the Gravenhold explorer.
//!
//! This crate ties the other gh-* crates into a running server. It provides:
//!
//! - Axum-based HTML routes for entity lookup and edit pages
//! - Disk-loaded HTML templates with `{var}` substitution
//! - Static file serving and request tracing
//! - Graceful shutdown via signal handling

pub mod context;
pub mod error;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod templates;

use std::net::SocketAddr;
use std::sync::Arc;

use gh_core::config::Config;

use crate::context::AppContext;
use crate::templates::TemplateStore;

/// Start the explorer server.
///
/// This is the main entry point. It initializes the database, seeds the
/// mock game data, loads the templates, constructs the [`AppContext`], and
/// serves HTTP until a shutdown signal is received.
pub async fn start(config: Config) -> gh_core::Result<()> {
    for warning in config.validate() {
        tracing::warn!("Config warning: {warning}");
    }

    // Initialize database.
    let db_path = &config.server.db_path;
    let existed = db_path.exists();
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| gh_core::Error::Io { source: e })?;
            tracing::info!("Created database directory {}", parent.display());
        }
    }
    let db_str = db_path.to_string_lossy();
    let db = gh_db::pool::init_pool(&db_str)?;
    if existed {
        tracing::info!("Database opened (existing) at {db_str}");
    } else {
        tracing::info!("Database created (new) at {db_str}");
    }

    // Seed mock game data into any empty table.
    {
        let conn = gh_db::pool::get_conn(&db)?;
        gh_db::seed::verify_game_data(&conn)?;
    }

    // Load HTML templates from disk.
    let templates = Arc::new(TemplateStore::load(&config.server.templates_dir)?);
    tracing::info!(
        "Loaded {} templates from {}",
        templates.len(),
        config.server.templates_dir.display()
    );

    let static_dir = config.server.static_dir.clone();
    let ctx = AppContext {
        db,
        config: Arc::new(config.clone()),
        templates,
    };

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| gh_core::Error::Internal(format!("Invalid server address: {e}")))?;

    let app = router::build_router(ctx, static_dir);

    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| gh_core::Error::Internal(format!("Failed to bind to {addr}: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| gh_core::Error::Internal(format!("Server error: {e}")))?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    tracing::info!("Shutdown signal received");
}
