//! Repository layer abstractions and SQLite implementations.
//!
//! # Responsibility
//! - Define per-record-kind data access contracts.
//! - Isolate SQLite query details from service orchestration.
//! - Provide the transactional `create_*s` batch write unit.
//!
//! # Invariants
//! - Write paths validate every record before SQL mutations.
//! - Batch writes are all-or-nothing: any error rolls back the whole batch.
//! - Read paths reject invalid persisted rows instead of masking them.

use crate::db::DbError;
use crate::model::container::ContainerValidationError;
use crate::model::ship::ShipValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod container_repo;
mod schema;
pub mod ship_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error shared by all record kinds.
#[derive(Debug)]
pub enum RepoError {
    ShipValidation(ShipValidationError),
    ContainerValidation(ContainerValidationError),
    Db(DbError),
    /// A create call received a record that already carries an id.
    AlreadyPersisted {
        table: &'static str,
        id: i64,
    },
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ShipValidation(err) => write!(f, "{err}"),
            Self::ContainerValidation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::AlreadyPersisted { table, id } => {
                write!(f, "record already persisted in `{table}` with id {id}")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} is not the fleet schema {expected_version}; open it with `open_db`"
            ),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "missing required column `{table}.{column}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ShipValidation(err) => Some(err),
            Self::ContainerValidation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ShipValidationError> for RepoError {
    fn from(value: ShipValidationError) -> Self {
        Self::ShipValidation(value)
    }
}

impl From<ContainerValidationError> for RepoError {
    fn from(value: ContainerValidationError) -> Self {
        Self::ContainerValidation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
