//! Weapon lookup and save operations.

use gh_core::{Error, Result, WeaponId};
use rusqlite::Connection;

use crate::models::Weapon;

const COLUMNS: &str = "id, name, weight, min_damage, max_damage, description, buy_value, sell_value, monster_only, image_url";

/// Get a weapon by primary key.
pub fn get_weapon_by_id(conn: &Connection, id: WeaponId) -> Result<Option<Weapon>> {
    let result = conn.query_row(
        &format!("SELECT {COLUMNS} FROM weapons WHERE id = ?1"),
        [id.as_i64()],
        Weapon::from_row,
    );
    match result {
        Ok(w) => Ok(Some(w)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// Get a weapon by name (case-insensitive exact match, first match wins).
pub fn get_weapon_by_name(conn: &Connection, name: &str) -> Result<Option<Weapon>> {
    let result = conn.query_row(
        &format!("SELECT {COLUMNS} FROM weapons WHERE name = ?1 COLLATE NOCASE LIMIT 1"),
        [name],
        Weapon::from_row,
    );
    match result {
        Ok(w) => Ok(Some(w)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// List all weapons ordered by name.
pub fn list_weapons(conn: &Connection) -> Result<Vec<Weapon>> {
    let mut stmt = conn
        .prepare(&format!("SELECT {COLUMNS} FROM weapons ORDER BY name ASC"))
        .map_err(|e| Error::database(e.to_string()))?;
    let rows = stmt
        .query_map([], Weapon::from_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(rows)
}

/// Insert a weapon with its explicit id (used by the seeder).
pub fn insert_weapon(conn: &Connection, weapon: &Weapon) -> Result<()> {
    conn.execute(
        "INSERT INTO weapons (id, name, weight, min_damage, max_damage, description, buy_value, sell_value, monster_only, image_url)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        rusqlite::params![
            weapon.id.as_i64(),
            weapon.name,
            weapon.weight,
            weapon.min_damage,
            weapon.max_damage,
            weapon.description,
            weapon.buy_value,
            weapon.sell_value,
            weapon.monster_only,
            weapon.image_url,
        ],
    )
    .map_err(|e| Error::database(e.to_string()))?;
    Ok(())
}

/// Overwrite all fields of the row with the same id. Last writer wins.
/// Returns true if a row matched.
pub fn update_weapon(conn: &Connection, weapon: &Weapon) -> Result<bool> {
    let n = conn
        .execute(
            "UPDATE weapons
             SET name = ?1, weight = ?2, min_damage = ?3, max_damage = ?4,
                 description = ?5, buy_value = ?6, sell_value = ?7,
                 monster_only = ?8, image_url = ?9
             WHERE id = ?10",
            rusqlite::params![
                weapon.name,
                weapon.weight,
                weapon.min_damage,
                weapon.max_damage,
                weapon.description,
                weapon.buy_value,
                weapon.sell_value,
                weapon.monster_only,
                weapon.image_url,
                weapon.id.as_i64(),
            ],
        )
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(n > 0)
}
