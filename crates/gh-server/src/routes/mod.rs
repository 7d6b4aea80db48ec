//! Route handlers for the explorer pages.

pub mod armor;
pub mod monsters;
pub mod pages;
pub mod players;
pub mod weapons;

use serde::Deserialize;

/// Query parameters for the `by_name` form-target lookups.
#[derive(Debug, Deserialize)]
pub struct NameQuery {
    pub name: String,
}
