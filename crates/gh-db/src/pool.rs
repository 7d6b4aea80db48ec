//! SQLite connection pooling.
//!
//! Both constructors run the embedded migrations before handing the pool
//! back, so a [`DbPool`] is always ready for queries.

use gh_core::{Error, Result};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;

use crate::migrations;

/// Connection pool shared across request handlers.
pub type DbPool = Pool<SqliteConnectionManager>;

/// A single checked-out connection.
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// The explorer is a low-traffic admin tool; a small pool keeps SQLite
/// writer contention down.
const MAX_CONNECTIONS: u32 = 4;

/// Applied to every file-backed connection. WAL lets lookups proceed while
/// an edit commits; the busy timeout covers the brief writer lock a save
/// holds.
const FILE_PRAGMAS: &str = "PRAGMA foreign_keys = ON;
     PRAGMA journal_mode = WAL;
     PRAGMA busy_timeout = 5000;";

fn build_pool(manager: SqliteConnectionManager) -> Result<DbPool> {
    let pool = Pool::builder()
        .max_size(MAX_CONNECTIONS)
        .build(manager)
        .map_err(|e| Error::database(format!("connection pool setup failed: {e}")))?;

    let conn = get_conn(&pool)?;
    migrations::run_migrations(&conn)?;

    Ok(pool)
}

/// Open the game database at `db_path`, creating the file if needed.
pub fn init_pool(db_path: &str) -> Result<DbPool> {
    let manager =
        SqliteConnectionManager::file(db_path).with_init(|conn| conn.execute_batch(FILE_PRAGMAS));
    build_pool(manager)
}

/// Create a pool over a private in-memory database.
///
/// Every call gets its own uniquely-named shared-cache database: the
/// connections within one pool all see the same tables, while pools
/// created by concurrently running tests stay isolated from each other.
pub fn init_memory_pool() -> Result<DbPool> {
    use std::sync::atomic::{AtomicU64, Ordering};
    static NEXT_DB: AtomicU64 = AtomicU64::new(0);
    let uri = format!(
        "file:gravenhold_test_{}?mode=memory&cache=shared",
        NEXT_DB.fetch_add(1, Ordering::Relaxed)
    );

    let manager = SqliteConnectionManager::file(uri)
        .with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"));
    build_pool(manager)
}

/// Check a connection out of the pool.
pub fn get_conn(pool: &DbPool) -> Result<PooledConnection> {
    pool.get()
        .map_err(|e| Error::database(format!("no database connection available: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insert_marker_armor(conn: &PooledConnection) {
        conn.execute(
            "INSERT INTO armor (id, name, ac, weight, damage_buffer, buy_value, sell_value, monster_only, description)
             VALUES (1, 'test plate', 10, 10, 0, 0, 0, 0, 'marker row')",
            [],
        )
        .unwrap();
    }

    fn armor_count(conn: &PooledConnection) -> i64 {
        conn.query_row("SELECT COUNT(*) FROM armor", [], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn memory_pool_is_migrated() {
        let pool = init_memory_pool().unwrap();
        let conn = get_conn(&pool).unwrap();

        let applied: i64 = conn
            .query_row("SELECT COUNT(*) FROM schema_migrations", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert!(applied >= 1);
    }

    #[test]
    fn foreign_keys_are_enabled() {
        let pool = init_memory_pool().unwrap();
        let conn = get_conn(&pool).unwrap();

        let fk: i32 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(fk, 1);
    }

    #[test]
    fn connections_within_a_pool_share_state() {
        let pool = init_memory_pool().unwrap();
        let writer = get_conn(&pool).unwrap();
        insert_marker_armor(&writer);

        let reader = get_conn(&pool).unwrap();
        assert_eq!(armor_count(&reader), 1);
    }

    #[test]
    fn separate_memory_pools_are_isolated() {
        let first = init_memory_pool().unwrap();
        let second = init_memory_pool().unwrap();

        insert_marker_armor(&get_conn(&first).unwrap());
        assert_eq!(armor_count(&get_conn(&second).unwrap()), 0);
    }
}
