//! All-or-nothing walkthrough.
//!
//! Commits one valid batch per record kind, submits one batch per kind that
//! contains a zero value, then prints what is durable.

use super::{print_json, CommandResult};
use log::info;
use rusqlite::Connection;
use serde::Serialize;
use shipyard_core::{
    Container, ContainerService, Ship, ShipService, SqliteContainerRepository,
    SqliteShipRepository,
};

#[derive(Debug, Serialize)]
struct DemoReport {
    committed_ships: Vec<Ship>,
    rejected_ship_batch: String,
    committed_containers: Vec<Container>,
    rejected_container_batch: String,
    durable_ships: Vec<Ship>,
    durable_containers: Vec<Container>,
}

pub fn execute(conn: &Connection) -> CommandResult {
    let ships = ShipService::new(SqliteShipRepository::try_new(conn)?);
    let containers = ContainerService::new(SqliteContainerRepository::try_new(conn)?);

    let committed_ships = ships.add_ships(&[
        Ship::new("Titanic", 46_328.0),
        Ship::new("Carpathia", 13_603.0),
    ])?;
    let rejected_ship_batch = match ships.add_ships(&[
        Ship::new("Californian", 6_223.0),
        Ship::new("Ghost", 0.0),
    ]) {
        Ok(_) => return Err("batch containing zero tonnage was accepted".into()),
        Err(err) => err.to_string(),
    };

    let committed_containers =
        containers.add_containers(&[Container::new("toys", 5.0), Container::new("candy", 5.0)])?;
    let rejected_container_batch = match containers.add_containers(&[
        Container::new("tea", 12.0),
        Container::new("air", 0.0),
    ]) {
        Ok(_) => return Err("batch containing zero weight was accepted".into()),
        Err(err) => err.to_string(),
    };

    let report = DemoReport {
        committed_ships,
        rejected_ship_batch,
        committed_containers,
        rejected_container_batch,
        durable_ships: ships.get_all_ships()?,
        durable_containers: containers.get_all_containers()?,
    };
    info!(
        "event=demo module=cli status=ok ships={} containers={}",
        report.durable_ships.len(),
        report.durable_containers.len()
    );
    print_json(&report)
}
