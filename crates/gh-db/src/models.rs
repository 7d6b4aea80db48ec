//! Rust structs mapping to database tables.
//!
//! Each model implements `from_row` for constructing itself from a
//! `rusqlite::Row`, with column order matching the SELECT lists in the
//! query modules.

use gh_core::{ArmorId, MonsterId, PlayerId, WeaponId};

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// A player character.
///
/// The password column is plaintext; the explorer edits it like any other
/// field and auth is out of scope for this tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub username: String,
    pub password: String,
    pub name: String,
    pub level: i64,
    pub health: i64,
    pub exp: i64,
    pub gold: i64,
    pub bank: i64,
    pub weapon: WeaponId,
    pub armor: ArmorId,
    pub description: String,
}

impl Player {
    /// Build from a row selected as:
    /// id, username, password, name, level, health, exp, gold, bank,
    /// weapon, armor, description
    pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: PlayerId::from(row.get::<_, i64>(0)?),
            username: row.get(1)?,
            password: row.get(2)?,
            name: row.get(3)?,
            level: row.get(4)?,
            health: row.get(5)?,
            exp: row.get(6)?,
            gold: row.get(7)?,
            bank: row.get(8)?,
            weapon: WeaponId::from(row.get::<_, i64>(9)?),
            armor: ArmorId::from(row.get::<_, i64>(10)?),
            description: row.get(11)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Monster
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monster {
    pub id: MonsterId,
    pub name: String,
    pub level: i64,
    pub health: i64,
    /// Experience awarded for defeating the monster.
    pub exp: i64,
    pub weapon: WeaponId,
    pub armor: ArmorId,
    pub description: String,
    pub image_url: Option<String>,
}

impl Monster {
    /// Build from a row selected as:
    /// id, name, level, health, exp, weapon, armor, description, image_url
    pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: MonsterId::from(row.get::<_, i64>(0)?),
            name: row.get(1)?,
            level: row.get(2)?,
            health: row.get(3)?,
            exp: row.get(4)?,
            weapon: WeaponId::from(row.get::<_, i64>(5)?),
            armor: ArmorId::from(row.get::<_, i64>(6)?),
            description: row.get(7)?,
            image_url: row.get(8)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Weapon
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weapon {
    pub id: WeaponId,
    pub name: String,
    pub weight: i64,
    pub min_damage: i64,
    pub max_damage: i64,
    pub description: String,
    pub buy_value: i64,
    pub sell_value: i64,
    /// Wielded only by monsters; hidden from shop inventories.
    pub monster_only: bool,
    pub image_url: Option<String>,
}

impl Weapon {
    /// Build from a row selected as:
    /// id, name, weight, min_damage, max_damage, description, buy_value,
    /// sell_value, monster_only, image_url
    pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: WeaponId::from(row.get::<_, i64>(0)?),
            name: row.get(1)?,
            weight: row.get(2)?,
            min_damage: row.get(3)?,
            max_damage: row.get(4)?,
            description: row.get(5)?,
            buy_value: row.get(6)?,
            sell_value: row.get(7)?,
            monster_only: row.get(8)?,
            image_url: row.get(9)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Armor
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Armor {
    pub id: ArmorId,
    pub name: String,
    /// Armor class.
    pub ac: i64,
    pub weight: i64,
    /// Flat damage absorbed per hit.
    pub damage_buffer: i64,
    pub buy_value: i64,
    pub sell_value: i64,
    pub monster_only: bool,
    pub description: String,
}

impl Armor {
    /// Build from a row selected as:
    /// id, name, ac, weight, damage_buffer, buy_value, sell_value,
    /// monster_only, description
    pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: ArmorId::from(row.get::<_, i64>(0)?),
            name: row.get(1)?,
            ac: row.get(2)?,
            weight: row.get(3)?,
            damage_buffer: row.get(4)?,
            buy_value: row.get(5)?,
            sell_value: row.get(6)?,
            monster_only: row.get(7)?,
            description: row.get(8)?,
        })
    }
}
