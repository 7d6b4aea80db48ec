//! gh-core: shared kernel for the Gravenhold explorer.
//!
//! Provides the unified error type, typed entity IDs, and application
//! configuration used by every other crate in the workspace.

pub mod config;
pub mod error;
pub mod ids;

pub use error::{Error, Result};
pub use ids::{ArmorId, MonsterId, PlayerId, WeaponId};
