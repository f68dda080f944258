//! Ship subcommands.
//!
//! Usage: shipyard add-ships NAME:TONNAGE... | list-ships | get-ship ID

use super::{parse_labeled_value, print_json, CommandResult};
use clap::Args;
use rusqlite::Connection;
use shipyard_core::{Ship, ShipId, ShipService, SqliteShipRepository};

#[derive(Debug, Args)]
pub struct AddShipsArgs {
    /// Ships as NAME:TONNAGE, persisted together or not at all
    #[arg(required = true, value_parser = parse_ship)]
    pub ships: Vec<Ship>,
}

#[derive(Debug, Args)]
pub struct GetShipArgs {
    pub id: ShipId,
}

fn parse_ship(input: &str) -> Result<Ship, String> {
    parse_labeled_value(input).map(|(name, tonnage)| Ship::new(name, tonnage))
}

fn service(
    conn: &Connection,
) -> Result<ShipService<SqliteShipRepository<'_>>, Box<dyn std::error::Error>> {
    Ok(ShipService::new(SqliteShipRepository::try_new(conn)?))
}

pub fn add(conn: &Connection, args: AddShipsArgs) -> CommandResult {
    let persisted = service(conn)?.add_ships(&args.ships)?;
    print_json(&persisted)
}

pub fn list(conn: &Connection) -> CommandResult {
    print_json(&service(conn)?.get_all_ships()?)
}

pub fn get(conn: &Connection, args: GetShipArgs) -> CommandResult {
    print_json(&service(conn)?.get_ship_by_id(args.id)?)
}
