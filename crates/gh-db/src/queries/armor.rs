//! Armor lookup and save operations.

use gh_core::{ArmorId, Error, Result};
use rusqlite::Connection;

use crate::models::Armor;

const COLUMNS: &str =
    "id, name, ac, weight, damage_buffer, buy_value, sell_value, monster_only, description";

/// Get an armor piece by primary key.
pub fn get_armor_by_id(conn: &Connection, id: ArmorId) -> Result<Option<Armor>> {
    let result = conn.query_row(
        &format!("SELECT {COLUMNS} FROM armor WHERE id = ?1"),
        [id.as_i64()],
        Armor::from_row,
    );
    match result {
        Ok(a) => Ok(Some(a)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// Get an armor piece by name (case-insensitive exact match, first match
/// wins).
pub fn get_armor_by_name(conn: &Connection, name: &str) -> Result<Option<Armor>> {
    let result = conn.query_row(
        &format!("SELECT {COLUMNS} FROM armor WHERE name = ?1 COLLATE NOCASE LIMIT 1"),
        [name],
        Armor::from_row,
    );
    match result {
        Ok(a) => Ok(Some(a)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// List all armor ordered by name.
pub fn list_armor(conn: &Connection) -> Result<Vec<Armor>> {
    let mut stmt = conn
        .prepare(&format!("SELECT {COLUMNS} FROM armor ORDER BY name ASC"))
        .map_err(|e| Error::database(e.to_string()))?;
    let rows = stmt
        .query_map([], Armor::from_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(rows)
}

/// Insert an armor piece with its explicit id (used by the seeder).
pub fn insert_armor(conn: &Connection, armor: &Armor) -> Result<()> {
    conn.execute(
        "INSERT INTO armor (id, name, ac, weight, damage_buffer, buy_value, sell_value, monster_only, description)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        rusqlite::params![
            armor.id.as_i64(),
            armor.name,
            armor.ac,
            armor.weight,
            armor.damage_buffer,
            armor.buy_value,
            armor.sell_value,
            armor.monster_only,
            armor.description,
        ],
    )
    .map_err(|e| Error::database(e.to_string()))?;
    Ok(())
}

/// Overwrite all fields of the row with the same id. Last writer wins.
/// Returns true if a row matched.
pub fn update_armor(conn: &Connection, armor: &Armor) -> Result<bool> {
    let n = conn
        .execute(
            "UPDATE armor
             SET name = ?1, ac = ?2, weight = ?3, damage_buffer = ?4,
                 buy_value = ?5, sell_value = ?6, monster_only = ?7, description = ?8
             WHERE id = ?9",
            rusqlite::params![
                armor.name,
                armor.ac,
                armor.weight,
                armor.damage_buffer,
                armor.buy_value,
                armor.sell_value,
                armor.monster_only,
                armor.description,
                armor.id.as_i64(),
            ],
        )
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::init_memory_pool;

    fn sample(id: i64, name: &str) -> Armor {
        Armor {
            id: ArmorId::from(id),
            name: name.to_string(),
            ac: 20,
            weight: 15,
            damage_buffer: 2,
            buy_value: 100,
            sell_value: 30,
            monster_only: false,
            description: "A test cuirass.".to_string(),
        }
    }

    #[test]
    fn insert_and_get() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();
        insert_armor(&conn, &sample(1, "leather armor")).unwrap();

        let found = get_armor_by_name(&conn, "Leather Armor").unwrap().unwrap();
        assert_eq!(found.ac, 20);
    }

    #[test]
    fn missing_armor_is_none() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();
        assert!(get_armor_by_name(&conn, "mithril coat").unwrap().is_none());
    }

    #[test]
    fn update_round_trip() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();
        insert_armor(&conn, &sample(1, "leather armor")).unwrap();

        let mut armor = get_armor_by_name(&conn, "leather armor").unwrap().unwrap();
        armor.damage_buffer = 4;
        armor.sell_value = 45;
        assert!(update_armor(&conn, &armor).unwrap());

        let reloaded = get_armor_by_id(&conn, armor.id).unwrap().unwrap();
        assert_eq!(reloaded.damage_buffer, 4);
        assert_eq!(reloaded.sell_value, 45);
    }
}
