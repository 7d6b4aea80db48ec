//! Shared application context.
//!
//! [`AppContext`] is the central struct shared across all route handlers via
//! Axum state. It is cheaply cloneable because it only holds the pool handle
//! and `Arc`s.

use std::sync::Arc;

use gh_core::config::Config;
use gh_db::pool::DbPool;

use crate::templates::TemplateStore;

/// Application context shared by all request handlers (via Axum state).
#[derive(Clone)]
pub struct AppContext {
    /// Database connection pool.
    pub db: DbPool,
    /// Immutable application configuration snapshot.
    pub config: Arc<Config>,
    /// HTML templates loaded at startup.
    pub templates: Arc<TemplateStore>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_is_cloneable() {
        let db = gh_db::pool::init_memory_pool().unwrap();
        let ctx = AppContext {
            db,
            config: Arc::new(Config::default()),
            templates: Arc::new(TemplateStore::default()),
        };
        let _clone = ctx.clone();
    }
}
