//! gh-db: database access and persistence layer.
//!
//! This crate provides SQLite-backed storage with connection pooling,
//! embedded migrations, typed models, per-entity query modules, and the
//! mock-data seeder for all Gravenhold entities.

pub mod migrations;
pub mod models;
pub mod pool;
pub mod queries;
pub mod seed;
