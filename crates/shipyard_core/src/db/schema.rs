//! Fleet schema bootstrap.
//!
//! There is exactly one schema version. A fresh database (`user_version = 0`)
//! gets `schema.sql` in one transaction; a database already stamped with
//! [`SCHEMA_VERSION`] is left untouched; anything else is refused.

use super::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

/// Version stamped into `PRAGMA user_version` once the fleet tables exist.
pub const SCHEMA_VERSION: u32 = 1;

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Creates the fleet tables on a fresh database.
///
/// # Errors
/// - `UnsupportedSchemaVersion` when the file carries any other stamp.
/// - `Sqlite` when table creation fails; nothing is left half-created.
pub fn bootstrap_schema(conn: &mut Connection) -> DbResult<()> {
    match schema_version(conn)? {
        SCHEMA_VERSION => Ok(()),
        0 => {
            let tx = conn.transaction()?;
            tx.execute_batch(SCHEMA_SQL)?;
            tx.pragma_update(None, "user_version", SCHEMA_VERSION)?;
            tx.commit()?;
            info!("event=db_bootstrap module=db status=ok schema_version={SCHEMA_VERSION}");
            Ok(())
        }
        found => Err(DbError::UnsupportedSchemaVersion {
            found,
            supported: SCHEMA_VERSION,
        }),
    }
}

/// Reads the stamp in `PRAGMA user_version`; `0` means never bootstrapped.
pub fn schema_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.pragma_query_value(None, "user_version", |row| row.get(0))?)
}
