//! Per-entity query modules.

pub mod armor;
pub mod monsters;
pub mod players;
pub mod weapons;
