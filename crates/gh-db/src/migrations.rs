//! Embedded SQL migrations and runner.
//!
//! Migrations are stored as `&str` constants and executed in order.  A
//! `schema_migrations` table tracks which versions have been applied.

use gh_core::{Error, Result};
use rusqlite::Connection;

/// V1: initial schema -- creates the four game tables and name indexes.
///
/// Weapon/armor references on players and monsters are loose integer ids;
/// the original schema declared no cascades and the lookup code never
/// relied on referential integrity, so none is added here.
const V1_INITIAL: &str = r#"
CREATE TABLE weapons (
    id           INTEGER PRIMARY KEY,
    name         TEXT NOT NULL,
    weight       INTEGER NOT NULL,
    min_damage   INTEGER NOT NULL,
    max_damage   INTEGER NOT NULL,
    description  TEXT NOT NULL,
    buy_value    INTEGER NOT NULL,
    sell_value   INTEGER NOT NULL,
    monster_only INTEGER NOT NULL DEFAULT 0,
    image_url    TEXT
);

CREATE TABLE armor (
    id            INTEGER PRIMARY KEY,
    name          TEXT NOT NULL,
    ac            INTEGER NOT NULL,
    weight        INTEGER NOT NULL,
    damage_buffer INTEGER NOT NULL,
    buy_value     INTEGER NOT NULL,
    sell_value    INTEGER NOT NULL,
    monster_only  INTEGER NOT NULL DEFAULT 0,
    description   TEXT NOT NULL
);

CREATE TABLE players (
    id          INTEGER PRIMARY KEY,
    username    TEXT NOT NULL,
    password    TEXT NOT NULL,
    name        TEXT NOT NULL,
    level       INTEGER NOT NULL,
    health      INTEGER NOT NULL,
    exp         INTEGER NOT NULL,
    gold        INTEGER NOT NULL,
    bank        INTEGER NOT NULL,
    weapon      INTEGER NOT NULL,
    armor       INTEGER NOT NULL,
    description TEXT NOT NULL
);

CREATE TABLE monsters (
    id          INTEGER PRIMARY KEY,
    name        TEXT NOT NULL,
    level       INTEGER NOT NULL,
    health      INTEGER NOT NULL,
    exp         INTEGER NOT NULL,
    weapon      INTEGER NOT NULL,
    armor       INTEGER NOT NULL,
    description TEXT NOT NULL,
    image_url   TEXT
);

-- Name lookups are the hot path for every explorer page.
CREATE INDEX idx_weapons_name    ON weapons(name COLLATE NOCASE);
CREATE INDEX idx_armor_name      ON armor(name COLLATE NOCASE);
CREATE INDEX idx_players_name    ON players(name COLLATE NOCASE);
CREATE INDEX idx_players_user    ON players(username COLLATE NOCASE);
CREATE INDEX idx_monsters_name   ON monsters(name COLLATE NOCASE);
"#;

/// Ordered list of (version, sql) pairs.
const MIGRATIONS: &[(i64, &str)] = &[(1, V1_INITIAL)];

/// Run all pending migrations on `conn`.
///
/// Creates the `schema_migrations` tracking table if it does not exist,
/// then applies each outstanding migration inside a transaction.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version    INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        )",
    )
    .map_err(|e| Error::database(format!("Failed to create schema_migrations: {e}")))?;

    for &(version, sql) in MIGRATIONS {
        let already: bool = conn
            .query_row(
                "SELECT COUNT(*) > 0 FROM schema_migrations WHERE version = ?1",
                [version],
                |row| row.get(0),
            )
            .map_err(|e| Error::database(e.to_string()))?;

        if already {
            continue;
        }

        let tx = conn
            .unchecked_transaction()
            .map_err(|e| Error::database(e.to_string()))?;

        tx.execute_batch(sql)
            .map_err(|e| Error::database(format!("Migration V{version} failed: {e}")))?;

        tx.execute(
            "INSERT INTO schema_migrations (version) VALUES (?1)",
            [version],
        )
        .map_err(|e| Error::database(e.to_string()))?;

        tx.commit().map_err(|e| Error::database(e.to_string()))?;
    }

    Ok(())
}
