//! Connection readiness checks run when a repository is constructed.

use super::{RepoError, RepoResult};
use crate::db::{schema_version, DbError, SCHEMA_VERSION};
use rusqlite::Connection;
use std::collections::HashSet;

/// Fails unless `conn` carries the fleet schema stamp and `table` carries
/// every column in `columns`.
pub(crate) fn ensure_connection_ready(
    conn: &Connection,
    table: &'static str,
    columns: &[&'static str],
) -> RepoResult<()> {
    let actual_version = schema_version(conn)?;
    if actual_version == 0 {
        return Err(RepoError::UninitializedConnection {
            expected_version: SCHEMA_VERSION,
            actual_version,
        });
    }
    if actual_version != SCHEMA_VERSION {
        return Err(DbError::UnsupportedSchemaVersion {
            found: actual_version,
            supported: SCHEMA_VERSION,
        }
        .into());
    }

    let table_exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1);",
        [table],
        |row| row.get(0),
    )?;
    if !table_exists {
        return Err(RepoError::MissingRequiredTable(table));
    }

    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let present = stmt
        .query_map([], |row| row.get::<_, String>("name"))?
        .collect::<Result<HashSet<_>, _>>()?;

    for column in columns {
        if !present.contains(*column) {
            return Err(RepoError::MissingRequiredColumn { table, column });
        }
    }

    Ok(())
}
