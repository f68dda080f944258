//! Container repository contract and SQLite implementation.
//!
//! # Invariants
//! - `create_containers` writes the whole slice in one transaction or nothing.
//! - `find_all_containers` lists containers by ascending id.

use crate::db::with_write_transaction;
use crate::model::container::{Container, ContainerId};
use crate::repo::schema::ensure_connection_ready;
use crate::repo::{RepoError, RepoResult};
use log::debug;
use rusqlite::{params, Connection, Row};

const CONTAINERS_TABLE: &str = "containers";
const CONTAINER_COLUMNS: &[&str] = &["id", "contents", "weight"];
const CONTAINER_SELECT_SQL: &str = "SELECT id, contents, weight FROM containers";

/// Repository interface for container persistence.
pub trait ContainerRepository {
    fn create_container(&self, container: &Container) -> RepoResult<Container>;
    /// Persists all containers as one unit, returned in input order.
    fn create_containers(&self, containers: &[Container]) -> RepoResult<Vec<Container>>;
    fn find_all_containers(&self) -> RepoResult<Vec<Container>>;
    fn find_container_by_id(&self, id: ContainerId) -> RepoResult<Option<Container>>;
}

impl<R: ContainerRepository + ?Sized> ContainerRepository for &R {
    fn create_container(&self, container: &Container) -> RepoResult<Container> {
        (**self).create_container(container)
    }

    fn create_containers(&self, containers: &[Container]) -> RepoResult<Vec<Container>> {
        (**self).create_containers(containers)
    }

    fn find_all_containers(&self) -> RepoResult<Vec<Container>> {
        (**self).find_all_containers()
    }

    fn find_container_by_id(&self, id: ContainerId) -> RepoResult<Option<Container>> {
        (**self).find_container_by_id(id)
    }
}

/// SQLite-backed container repository.
pub struct SqliteContainerRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteContainerRepository<'conn> {
    /// Constructs a repository from a connection opened with `open_db*`.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, CONTAINERS_TABLE, CONTAINER_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl ContainerRepository for SqliteContainerRepository<'_> {
    fn create_container(&self, container: &Container) -> RepoResult<Container> {
        insert_container(self.conn, container)
    }

    fn create_containers(&self, containers: &[Container]) -> RepoResult<Vec<Container>> {
        let persisted = with_write_transaction(self.conn, "container_batch", |tx| {
            containers
                .iter()
                .map(|container| insert_container(tx, container))
                .collect::<RepoResult<Vec<_>>>()
        })?;
        debug!(
            "event=container_insert_batch module=repo status=ok count={}",
            persisted.len()
        );
        Ok(persisted)
    }

    fn find_all_containers(&self) -> RepoResult<Vec<Container>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CONTAINER_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut containers = Vec::new();

        while let Some(row) = rows.next()? {
            containers.push(parse_container_row(row)?);
        }

        Ok(containers)
    }

    fn find_container_by_id(&self, id: ContainerId) -> RepoResult<Option<Container>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CONTAINER_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_container_row(row)?));
        }

        Ok(None)
    }
}

fn insert_container(conn: &Connection, container: &Container) -> RepoResult<Container> {
    if let Some(id) = container.id {
        return Err(RepoError::AlreadyPersisted {
            table: CONTAINERS_TABLE,
            id,
        });
    }
    container.validate()?;

    conn.execute(
        "INSERT INTO containers (contents, weight) VALUES (?1, ?2);",
        params![container.contents.as_str(), container.weight],
    )?;

    Ok(container.clone().with_id(conn.last_insert_rowid()))
}

fn parse_container_row(row: &Row<'_>) -> RepoResult<Container> {
    let id: ContainerId = row.get("id")?;
    let container =
        Container::new(row.get::<_, String>("contents")?, row.get("weight")?).with_id(id);
    container
        .validate()
        .map_err(|err| RepoError::InvalidData(format!("containers.id={id}: {err}")))?;
    Ok(container)
}
