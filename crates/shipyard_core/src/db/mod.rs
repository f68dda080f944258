//! SQLite connection setup, fleet schema bootstrap and the batch write scope.
//!
//! # Invariants
//! - Records are never read or written before `bootstrap_schema` succeeds.
//! - Batch writes go through `with_write_transaction` only.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
pub mod schema;
mod tx;

pub use open::{open_db, open_db_in_memory};
pub use schema::{schema_version, SCHEMA_VERSION};
pub use tx::with_write_transaction;

pub type DbResult<T> = Result<T, DbError>;

/// Storage-level failure below the repositories.
#[derive(Debug)]
pub enum DbError {
    /// The database at `target` could not be opened at all.
    Open {
        target: String,
        source: rusqlite::Error,
    },
    /// The file was stamped by something other than this schema.
    UnsupportedSchemaVersion { found: u32, supported: u32 },
    Sqlite(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open { target, source } => {
                write!(f, "cannot open fleet database `{target}`: {source}")
            }
            Self::UnsupportedSchemaVersion { found, supported } => write!(
                f,
                "fleet database carries schema version {found}; this build only knows {supported}"
            ),
            Self::Sqlite(err) => write!(f, "sqlite: {err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
