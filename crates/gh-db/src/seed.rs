//! Mock game data and the startup seeder.
//!
//! Each entity table gets its default rows inserted exactly once: a table
//! that already holds rows is left untouched, so restarting the server
//! never duplicates or clobbers edited data.

use gh_core::{ArmorId, Error, MonsterId, PlayerId, Result, WeaponId};
use rusqlite::Connection;

use crate::models::{Armor, Monster, Player, Weapon};
use crate::queries;

/// Default weapons. Ids are explicit so the weapon references on seeded
/// players and monsters stay stable.
pub fn default_weapons() -> Vec<Weapon> {
    let w = |id: i64,
             name: &str,
             weight: i64,
             min_damage: i64,
             max_damage: i64,
             buy_value: i64,
             sell_value: i64,
             description: &str| Weapon {
        id: WeaponId::from(id),
        name: name.to_string(),
        weight,
        min_damage,
        max_damage,
        description: description.to_string(),
        buy_value,
        sell_value,
        monster_only: false,
        image_url: None,
    };

    vec![
        w(
            1,
            "small club",
            5,
            0,
            3,
            0,
            0,
            "This is a small rough-hewn tree limb to function as a club.",
        ),
        w(
            2,
            "small dagger",
            5,
            0,
            3,
            0,
            0,
            "This is a small utility dagger that can be used for self-defense if required.",
        ),
        w(
            3,
            "rapier",
            10,
            1,
            4,
            10,
            5,
            "This rapier is primarily a thrust weapon with a very sharp point.",
        ),
        w(
            4,
            "cutlass",
            12,
            1,
            5,
            12,
            6,
            "This cutlass is a short sabre style slashing sword with a slight upward curved \
             blade with a basket shaped guard.",
        ),
        w(
            5,
            "Norse field axe",
            15,
            3,
            8,
            20,
            10,
            "A teak wood shaft attaches to the tempered carbon steel axe head through a single \
             socket. The haft has a wrapped leather grip. This axe features a slightly flared, \
             bearded axe blade.",
        ),
    ]
}

/// Default armor pieces.
pub fn default_armor() -> Vec<Armor> {
    let a = |id: i64,
             name: &str,
             ac: i64,
             weight: i64,
             damage_buffer: i64,
             buy_value: i64,
             sell_value: i64,
             description: &str| Armor {
        id: ArmorId::from(id),
        name: name.to_string(),
        ac,
        weight,
        damage_buffer,
        buy_value,
        sell_value,
        monster_only: false,
        description: description.to_string(),
    };

    vec![
        a(
            1,
            "cloth rags",
            2,
            5,
            0,
            0,
            0,
            "These are cloth rags stitched together as general body coverings and provide very \
             little protection.",
        ),
        a(
            2,
            "leather patch armor",
            5,
            10,
            0,
            30,
            5,
            "Similar to cloth rags, but made with dry rough scraps of leather stitched together. \
             It provides better protection from the elements and small arms.",
        ),
        a(
            3,
            "leather armor",
            20,
            15,
            2,
            100,
            30,
            "Finely crafted soft well oiled leather armor that is tailored to fit perfectly and \
             therefore is far more comfortable to wear and move in while providing improved \
             protection.",
        ),
        a(
            4,
            "basic chainmail armor",
            25,
            50,
            5,
            150,
            50,
            "This chainmail armor is designed to provide better protection than leather against \
             edged and blunt weapons alike. Its added protection comes at a price. It's heavier \
             and makes more noise when the chain links clink together hampering stealthy \
             movements.",
        ),
        a(
            5,
            "Dragon Scale Armor",
            25,
            70,
            8,
            500,
            250,
            "Extremely rare, Grand Dragon Scale armor glistens in the sunshine and draws \
             attention from every direction. It is quite a bit heavier than plate mail, but \
             provides better protection at the cost of its heavier weight.",
        ),
    ]
}

/// Default players. Everyone starts at level 1 with the same kit.
pub fn default_players() -> Vec<Player> {
    let p = |id: i64, username: &str, name: &str, description: &str| Player {
        id: PlayerId::from(id),
        username: username.to_string(),
        password: "password1".to_string(),
        name: name.to_string(),
        level: 1,
        health: 100,
        exp: 0,
        gold: 10,
        bank: 100,
        weapon: WeaponId::from(1),
        armor: ArmorId::from(1),
        description: description.to_string(),
    };

    vec![
        p(
            1,
            "Frag",
            "Mock_Dave",
            "A friendly and mischievous slaughter machine.",
        ),
        p(
            2,
            "Omegus",
            "Mock_Mark",
            "A flippant dilrod who is always searching for a victim.",
        ),
        p(
            3,
            "AbsoluteZero",
            "Mock_Mike",
            "A humble (not) and helpful Orc who always screams, \"Who wants to do some \
             shootin'?\"",
        ),
        p(
            4,
            "Idyil",
            "Mock_Rick",
            "The old wise man who is helpful and friendly to noone.",
        ),
    ]
}

/// Default monsters.
pub fn default_monsters() -> Vec<Monster> {
    let m = |id: i64,
             name: &str,
             level: i64,
             health: i64,
             exp: i64,
             description: &str,
             image: &str| Monster {
        id: MonsterId::from(id),
        name: name.to_string(),
        level,
        health,
        exp,
        weapon: WeaponId::from(1),
        armor: ArmorId::from(1),
        description: description.to_string(),
        image_url: Some(format!("/static/images/items/{image}")),
    };

    vec![
        m(
            1,
            "Goblin",
            3,
            10,
            10,
            "A small, pointed eared creature with a piercing bite.",
            "monster_goblin.png",
        ),
        m(
            2,
            "Minotaur",
            15,
            110,
            200,
            "A massive, half-horse, half-human creature with large horns.",
            "monster_minotaur.png",
        ),
        m(
            3,
            "Orc",
            10,
            25,
            25,
            "A dumb, yet extremely aggressive creature that reeks of death.",
            "monster_orc.png",
        ),
        m(
            4,
            "Rat",
            1,
            2,
            2,
            "A small, nocturnal creature with a propensity to steal your food at night.",
            "monster_rat.png",
        ),
        m(
            5,
            "Sonzo She-Dragon",
            50,
            1000,
            2000,
            "A majestic, silver-white dragon with a pair of wings that shimmer like jewels.",
            "monster_sonzo_she-dragon.png",
        ),
    ]
}

fn table_is_empty(conn: &Connection, table: &str) -> Result<bool> {
    // Table names come from the fixed list below, never from user input.
    let count: i64 = conn
        .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
            row.get(0)
        })
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(count == 0)
}

/// Verify the database contains the game data, inserting the defaults into
/// any table that is empty. Idempotent across restarts.
pub fn verify_game_data(conn: &Connection) -> Result<()> {
    tracing::info!("Verifying game data in the database");

    if table_is_empty(conn, "weapons")? {
        tracing::info!("Seeding weapons");
        for weapon in default_weapons() {
            queries::weapons::insert_weapon(conn, &weapon)?;
        }
    }

    if table_is_empty(conn, "armor")? {
        tracing::info!("Seeding armor");
        for armor in default_armor() {
            queries::armor::insert_armor(conn, &armor)?;
        }
    }

    if table_is_empty(conn, "players")? {
        tracing::info!("Seeding players");
        for player in default_players() {
            queries::players::insert_player(conn, &player)?;
        }
    }

    if table_is_empty(conn, "monsters")? {
        tracing::info!("Seeding monsters");
        for monster in default_monsters() {
            queries::monsters::insert_monster(conn, &monster)?;
        }
    }

    Ok(())
}
