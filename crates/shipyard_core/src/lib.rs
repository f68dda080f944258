//! Core domain logic for shipyard.
//! Ships and containers are validated and persisted in all-or-nothing batches.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, normalize_log_level};
pub use model::container::{Container, ContainerId, ContainerValidationError};
pub use model::ship::{Ship, ShipId, ShipValidationError};
pub use repo::container_repo::{ContainerRepository, SqliteContainerRepository};
pub use repo::ship_repo::{ShipRepository, SqliteShipRepository};
pub use repo::{RepoError, RepoResult};
pub use service::container_service::{ContainerService, ContainerServiceError};
pub use service::ship_service::{ShipService, ShipServiceError};

/// Minimal health-check API.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
