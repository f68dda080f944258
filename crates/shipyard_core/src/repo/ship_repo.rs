//! Ship repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide create / batch-create / read APIs over the `ships` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `create_ships` writes the whole slice in one transaction or nothing.
//! - Returned ships always carry the id assigned by SQLite.
//! - `find_all_ships` lists ships by ascending id, i.e. insertion order.

use crate::db::with_write_transaction;
use crate::model::ship::{Ship, ShipId};
use crate::repo::schema::ensure_connection_ready;
use crate::repo::{RepoError, RepoResult};
use log::debug;
use rusqlite::{params, Connection, Row};

const SHIPS_TABLE: &str = "ships";
const SHIP_COLUMNS: &[&str] = &["id", "name", "tonnage"];
const SHIP_SELECT_SQL: &str = "SELECT id, name, tonnage FROM ships";

/// Repository interface for ship persistence.
pub trait ShipRepository {
    /// Persists one transient ship and returns it with its new id.
    fn create_ship(&self, ship: &Ship) -> RepoResult<Ship>;
    /// Persists all ships as one unit, returned in input order.
    fn create_ships(&self, ships: &[Ship]) -> RepoResult<Vec<Ship>>;
    fn find_all_ships(&self) -> RepoResult<Vec<Ship>>;
    fn find_ship_by_id(&self, id: ShipId) -> RepoResult<Option<Ship>>;
}

impl<R: ShipRepository + ?Sized> ShipRepository for &R {
    fn create_ship(&self, ship: &Ship) -> RepoResult<Ship> {
        (**self).create_ship(ship)
    }

    fn create_ships(&self, ships: &[Ship]) -> RepoResult<Vec<Ship>> {
        (**self).create_ships(ships)
    }

    fn find_all_ships(&self) -> RepoResult<Vec<Ship>> {
        (**self).find_all_ships()
    }

    fn find_ship_by_id(&self, id: ShipId) -> RepoResult<Option<Ship>> {
        (**self).find_ship_by_id(id)
    }
}

/// SQLite-backed ship repository.
pub struct SqliteShipRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteShipRepository<'conn> {
    /// Constructs a repository from a connection opened with `open_db*`.
    ///
    /// # Errors
    /// - `UninitializedConnection` when the schema was never bootstrapped.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` on schema drift.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, SHIPS_TABLE, SHIP_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl ShipRepository for SqliteShipRepository<'_> {
    fn create_ship(&self, ship: &Ship) -> RepoResult<Ship> {
        insert_ship(self.conn, ship)
    }

    fn create_ships(&self, ships: &[Ship]) -> RepoResult<Vec<Ship>> {
        let persisted = with_write_transaction(self.conn, "ship_batch", |tx| {
            ships
                .iter()
                .map(|ship| insert_ship(tx, ship))
                .collect::<RepoResult<Vec<_>>>()
        })?;
        debug!(
            "event=ship_insert_batch module=repo status=ok count={}",
            persisted.len()
        );
        Ok(persisted)
    }

    fn find_all_ships(&self) -> RepoResult<Vec<Ship>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SHIP_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut ships = Vec::new();

        while let Some(row) = rows.next()? {
            ships.push(parse_ship_row(row)?);
        }

        Ok(ships)
    }

    fn find_ship_by_id(&self, id: ShipId) -> RepoResult<Option<Ship>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SHIP_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_ship_row(row)?));
        }

        Ok(None)
    }
}

fn insert_ship(conn: &Connection, ship: &Ship) -> RepoResult<Ship> {
    if let Some(id) = ship.id {
        return Err(RepoError::AlreadyPersisted {
            table: SHIPS_TABLE,
            id,
        });
    }
    ship.validate()?;

    conn.execute(
        "INSERT INTO ships (name, tonnage) VALUES (?1, ?2);",
        params![ship.name.as_str(), ship.tonnage],
    )?;

    Ok(ship.clone().with_id(conn.last_insert_rowid()))
}

fn parse_ship_row(row: &Row<'_>) -> RepoResult<Ship> {
    let id: ShipId = row.get("id")?;
    let ship = Ship::new(row.get::<_, String>("name")?, row.get("tonnage")?).with_id(id);
    ship
        .validate()
        .map_err(|err| RepoError::InvalidData(format!("ships.id={id}: {err}")))?;
    Ok(ship)
}
