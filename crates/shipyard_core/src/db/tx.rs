//! All-or-nothing write scope over one SQLite connection.
//!
//! # Invariants
//! - The scope starts with `BEGIN IMMEDIATE`, so a concurrent writer waits
//!   (up to the connection busy timeout) instead of interleaving.
//! - The scope commits only when the closure returns `Ok`; any `Err` rolls
//!   back every write made inside the closure before it is returned.

use log::{debug, warn};
use rusqlite::{Connection, Transaction, TransactionBehavior};

/// Runs `body` inside an immediate write transaction.
///
/// `scope` names the caller in log events (for example `ship_batch`).
///
/// # Errors
/// - Returns the closure error unchanged after rolling back.
/// - Returns a converted `rusqlite::Error` when begin or commit fails, e.g.
///   when `conn` is already inside a transaction.
pub fn with_write_transaction<T, E, F>(conn: &Connection, scope: &str, body: F) -> Result<T, E>
where
    E: From<rusqlite::Error>,
    F: FnOnce(&Connection) -> Result<T, E>,
{
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)?;
    let scoped: &Connection = &tx;

    match body(scoped) {
        Ok(value) => {
            tx.commit()?;
            debug!("event=tx_commit module=db status=ok scope={scope}");
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback() {
                warn!(
                    "event=tx_rollback module=db status=error scope={scope} error={rollback_err}"
                );
            } else {
                debug!("event=tx_rollback module=db status=ok scope={scope}");
            }
            Err(err)
        }
    }
}
