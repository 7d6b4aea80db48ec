//! Monster lookup and save operations.

use gh_core::{Error, MonsterId, Result};
use rusqlite::Connection;

use crate::models::Monster;

const COLUMNS: &str = "id, name, level, health, exp, weapon, armor, description, image_url";

/// Get a monster by primary key.
pub fn get_monster_by_id(conn: &Connection, id: MonsterId) -> Result<Option<Monster>> {
    let result = conn.query_row(
        &format!("SELECT {COLUMNS} FROM monsters WHERE id = ?1"),
        [id.as_i64()],
        Monster::from_row,
    );
    match result {
        Ok(m) => Ok(Some(m)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// Get a monster by name (case-insensitive exact match, first match wins).
pub fn get_monster_by_name(conn: &Connection, name: &str) -> Result<Option<Monster>> {
    let result = conn.query_row(
        &format!("SELECT {COLUMNS} FROM monsters WHERE name = ?1 COLLATE NOCASE LIMIT 1"),
        [name],
        Monster::from_row,
    );
    match result {
        Ok(m) => Ok(Some(m)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// List all monsters ordered by name.
pub fn list_monsters(conn: &Connection) -> Result<Vec<Monster>> {
    let mut stmt = conn
        .prepare(&format!("SELECT {COLUMNS} FROM monsters ORDER BY name ASC"))
        .map_err(|e| Error::database(e.to_string()))?;
    let rows = stmt
        .query_map([], Monster::from_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(rows)
}

/// Insert a monster with its explicit id (used by the seeder).
pub fn insert_monster(conn: &Connection, monster: &Monster) -> Result<()> {
    conn.execute(
        "INSERT INTO monsters (id, name, level, health, exp, weapon, armor, description, image_url)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        rusqlite::params![
            monster.id.as_i64(),
            monster.name,
            monster.level,
            monster.health,
            monster.exp,
            monster.weapon.as_i64(),
            monster.armor.as_i64(),
            monster.description,
            monster.image_url,
        ],
    )
    .map_err(|e| Error::database(e.to_string()))?;
    Ok(())
}

/// Overwrite all fields of the row with the same id. Last writer wins.
/// Returns true if a row matched.
pub fn update_monster(conn: &Connection, monster: &Monster) -> Result<bool> {
    let n = conn
        .execute(
            "UPDATE monsters
             SET name = ?1, level = ?2, health = ?3, exp = ?4, weapon = ?5,
                 armor = ?6, description = ?7, image_url = ?8
             WHERE id = ?9",
            rusqlite::params![
                monster.name,
                monster.level,
                monster.health,
                monster.exp,
                monster.weapon.as_i64(),
                monster.armor.as_i64(),
                monster.description,
                monster.image_url,
                monster.id.as_i64(),
            ],
        )
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::init_memory_pool;
    use gh_core::{ArmorId, WeaponId};

    fn sample(id: i64, name: &str) -> Monster {
        Monster {
            id: MonsterId::from(id),
            name: name.to_string(),
            level: 3,
            health: 10,
            exp: 10,
            weapon: WeaponId::from(1),
            armor: ArmorId::from(1),
            description: "A test creature.".to_string(),
            image_url: None,
        }
    }

    #[test]
    fn insert_and_get() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();
        insert_monster(&conn, &sample(1, "Goblin")).unwrap();

        let found = get_monster_by_name(&conn, "goblin").unwrap().unwrap();
        assert_eq!(found.level, 3);
        assert!(found.image_url.is_none());
    }

    #[test]
    fn missing_monster_is_none() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();
        assert!(get_monster_by_name(&conn, "Dragon").unwrap().is_none());
    }

    #[test]
    fn update_round_trip() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();
        insert_monster(&conn, &sample(1, "Goblin")).unwrap();

        let mut monster = get_monster_by_name(&conn, "Goblin").unwrap().unwrap();
        monster.health = 12;
        monster.image_url = Some("/static/images/goblin.png".to_string());
        assert!(update_monster(&conn, &monster).unwrap());

        let reloaded = get_monster_by_id(&conn, monster.id).unwrap().unwrap();
        assert_eq!(reloaded.health, 12);
        assert_eq!(
            reloaded.image_url.as_deref(),
            Some("/static/images/goblin.png")
        );
    }
}
