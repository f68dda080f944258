//! Connection setup for SQLite.
//!
//! # Invariants
//! - Returned connections have `foreign_keys=ON` and a busy timeout.
//! - Returned connections carry the fleet schema at [`SCHEMA_VERSION`].
//!
//! [`SCHEMA_VERSION`]: super::SCHEMA_VERSION

use super::schema::bootstrap_schema;
use super::{DbError, DbResult};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);
const IN_MEMORY_TARGET: &str = ":memory:";

/// Opens (creating if needed) a fleet database file.
///
/// # Side effects
/// - Bootstraps the schema on a fresh file.
/// - Emits `db_open` logging events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let path = path.as_ref();
    open_with(&path.display().to_string(), || Connection::open(path))
}

/// Opens a private in-memory fleet database; every call starts empty.
pub fn open_db_in_memory() -> DbResult<Connection> {
    open_with(IN_MEMORY_TARGET, Connection::open_in_memory)
}

fn open_with(
    target: &str,
    connect: impl FnOnce() -> rusqlite::Result<Connection>,
) -> DbResult<Connection> {
    let started_at = Instant::now();

    let opened = connect()
        .map_err(|source| DbError::Open {
            target: target.to_string(),
            source,
        })
        .and_then(|mut conn| {
            prepare_connection(&mut conn)?;
            Ok(conn)
        });

    match &opened {
        Ok(_) => info!(
            "event=db_open module=db status=ok target={} duration_ms={}",
            target,
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=db_open module=db status=error target={} duration_ms={} error={}",
            target,
            started_at.elapsed().as_millis(),
            err
        ),
    }
    opened
}

fn prepare_connection(conn: &mut Connection) -> DbResult<()> {
    conn.pragma_update(None, "foreign_keys", true)?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    bootstrap_schema(conn)
}
