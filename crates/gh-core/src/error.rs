//! Unified error type for the Gravenhold explorer.
//!
//! All crates funnel their failures into [`Error`], which carries enough
//! context for HTTP handlers to derive a status code via
//! [`Error::http_status`].

use std::fmt;

/// Convenience result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type covering all failure modes in the explorer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested entity could not be found.
    #[error("{entity} not found: {name}")]
    NotFound {
        /// The kind of entity (e.g. "player", "weapon").
        entity: String,
        /// The name or username that was looked up.
        name: String,
    },

    /// Request data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A conflicting row already exists.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A database operation failed.
    #[error("Database error: {source}")]
    Database {
        /// The underlying database error.
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An I/O operation failed.
    #[error("IO error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// A template could not be loaded or rendered.
    #[error("Template error: {0}")]
    Template(String),

    /// Catch-all for unexpected internal errors.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Map this error to an appropriate HTTP status code.
    pub fn http_status(&self) -> u16 {
        match self {
            Error::NotFound { .. } => 404,
            Error::Validation(_) => 400,
            Error::Conflict(_) => 409,
            Error::Database { .. } => 500,
            Error::Io { .. } => 500,
            Error::Template(_) => 500,
            Error::Internal(_) => 500,
        }
    }

    /// Convenience constructor for [`Error::NotFound`].
    pub fn not_found(entity: impl Into<String>, name: impl fmt::Display) -> Self {
        Error::NotFound {
            entity: entity.into(),
            name: name.to_string(),
        }
    }

    /// Convenience constructor for [`Error::Database`].
    pub fn database(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Error::Database {
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_and_status() {
        let err = Error::not_found("player", "Frag");
        assert_eq!(err.to_string(), "player not found: Frag");
        assert_eq!(err.http_status(), 404);
    }

    #[test]
    fn validation_status() {
        assert_eq!(Error::Validation("bad level".into()).http_status(), 400);
    }

    #[test]
    fn database_status() {
        assert_eq!(Error::database("locked").http_status(), 500);
    }
}
