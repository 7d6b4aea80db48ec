//! Player lookup and save operations.

use gh_core::{Error, PlayerId, Result};
use rusqlite::Connection;

use crate::models::Player;

const COLUMNS: &str =
    "id, username, password, name, level, health, exp, gold, bank, weapon, armor, description";

/// Get a player by primary key.
pub fn get_player_by_id(conn: &Connection, id: PlayerId) -> Result<Option<Player>> {
    let result = conn.query_row(
        &format!("SELECT {COLUMNS} FROM players WHERE id = ?1"),
        [id.as_i64()],
        Player::from_row,
    );
    match result {
        Ok(p) => Ok(Some(p)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// Get a player by display name (case-insensitive exact match, first match
/// wins).
pub fn get_player_by_name(conn: &Connection, name: &str) -> Result<Option<Player>> {
    let result = conn.query_row(
        &format!("SELECT {COLUMNS} FROM players WHERE name = ?1 COLLATE NOCASE LIMIT 1"),
        [name],
        Player::from_row,
    );
    match result {
        Ok(p) => Ok(Some(p)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// Get a player by username (case-insensitive exact match, first match
/// wins).
pub fn get_player_by_username(conn: &Connection, username: &str) -> Result<Option<Player>> {
    let result = conn.query_row(
        &format!("SELECT {COLUMNS} FROM players WHERE username = ?1 COLLATE NOCASE LIMIT 1"),
        [username],
        Player::from_row,
    );
    match result {
        Ok(p) => Ok(Some(p)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// List all players ordered by name.
pub fn list_players(conn: &Connection) -> Result<Vec<Player>> {
    let mut stmt = conn
        .prepare(&format!("SELECT {COLUMNS} FROM players ORDER BY name ASC"))
        .map_err(|e| Error::database(e.to_string()))?;
    let rows = stmt
        .query_map([], Player::from_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(rows)
}

/// Insert a player with its explicit id (used by the seeder).
pub fn insert_player(conn: &Connection, player: &Player) -> Result<()> {
    conn.execute(
        "INSERT INTO players (id, username, password, name, level, health, exp, gold, bank, weapon, armor, description)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        rusqlite::params![
            player.id.as_i64(),
            player.username,
            player.password,
            player.name,
            player.level,
            player.health,
            player.exp,
            player.gold,
            player.bank,
            player.weapon.as_i64(),
            player.armor.as_i64(),
            player.description,
        ],
    )
    .map_err(|e| Error::database(e.to_string()))?;
    Ok(())
}

/// Overwrite all fields of the row with the same id. Last writer wins.
/// Returns true if a row matched.
pub fn update_player(conn: &Connection, player: &Player) -> Result<bool> {
    let n = conn
        .execute(
            "UPDATE players
             SET username = ?1, password = ?2, name = ?3, level = ?4, health = ?5,
                 exp = ?6, gold = ?7, bank = ?8, weapon = ?9, armor = ?10, description = ?11
             WHERE id = ?12",
            rusqlite::params![
                player.username,
                player.password,
                player.name,
                player.level,
                player.health,
                player.exp,
                player.gold,
                player.bank,
                player.weapon.as_i64(),
                player.armor.as_i64(),
                player.description,
                player.id.as_i64(),
            ],
        )
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(n > 0)
}
