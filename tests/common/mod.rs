//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`] which creates an in-memory DB seeded with the
//! default game data, loads the real templates from the repo, and starts
//! Axum on a random port for HTTP-level testing.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use gh_core::config::Config;
use gh_db::pool::{init_memory_pool, DbPool};
use gh_server::context::AppContext;
use gh_server::router::build_router;
use gh_server::templates::TemplateStore;

/// Test harness wrapping a fully-constructed [`AppContext`] backed by an
/// in-memory database.
pub struct TestHarness {
    pub ctx: AppContext,
    pub db: DbPool,
}

impl TestHarness {
    /// Create a new harness with seeded data and the repo's templates.
    pub fn new() -> Self {
        let db = init_memory_pool().expect("failed to create in-memory pool");
        {
            let conn = db.get().expect("failed to get db connection");
            gh_db::seed::verify_game_data(&conn).expect("failed to seed game data");
        }

        let templates_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates");
        let templates =
            Arc::new(TemplateStore::load(&templates_dir).expect("failed to load templates"));

        let ctx = AppContext {
            db: db.clone(),
            config: Arc::new(Config::default()),
            templates,
        };

        Self { ctx, db }
    }

    /// Start an Axum server on a random port and return the harness together
    /// with the bound socket address.
    pub async fn with_server() -> (Self, SocketAddr) {
        let harness = Self::new();
        let app = build_router(harness.ctx.clone(), None);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind random port");
        let addr = listener.local_addr().expect("failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        (harness, addr)
    }

    /// Get a database connection from the pool.
    #[allow(dead_code)]
    pub fn conn(&self) -> gh_db::pool::PooledConnection {
        gh_db::pool::get_conn(&self.db).expect("failed to get db connection")
    }
}
