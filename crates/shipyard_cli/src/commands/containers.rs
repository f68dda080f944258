//! Container subcommands.
//!
//! Usage: shipyard add-containers CONTENTS:WEIGHT... | list-containers | get-container ID

use super::{parse_labeled_value, print_json, CommandResult};
use clap::Args;
use rusqlite::Connection;
use shipyard_core::{Container, ContainerId, ContainerService, SqliteContainerRepository};

#[derive(Debug, Args)]
pub struct AddContainersArgs {
    /// Containers as CONTENTS:WEIGHT, persisted together or not at all
    #[arg(required = true, value_parser = parse_container)]
    pub containers: Vec<Container>,
}

#[derive(Debug, Args)]
pub struct GetContainerArgs {
    pub id: ContainerId,
}

fn parse_container(input: &str) -> Result<Container, String> {
    parse_labeled_value(input).map(|(contents, weight)| Container::new(contents, weight))
}

fn service(
    conn: &Connection,
) -> Result<ContainerService<SqliteContainerRepository<'_>>, Box<dyn std::error::Error>> {
    Ok(ContainerService::new(SqliteContainerRepository::try_new(conn)?))
}

pub fn add(conn: &Connection, args: AddContainersArgs) -> CommandResult {
    print_json(&service(conn)?.add_containers(&args.containers)?)
}

pub fn list(conn: &Connection) -> CommandResult {
    print_json(&service(conn)?.get_all_containers()?)
}

pub fn get(conn: &Connection, args: GetContainerArgs) -> CommandResult {
    print_json(&service(conn)?.get_container_by_id(args.id)?)
}
