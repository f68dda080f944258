//! Ship use-case service.
//!
//! # Responsibility
//! - Validate-then-persist ship batches as one unit.
//! - Provide list and lookup-by-id entry points.
//!
//! # Invariants
//! - The first ship (lowest index) with non-positive tonnage rejects the whole
//!   batch; ships after it are not examined and nothing is written.
//! - Service layer remains storage-agnostic.

use crate::model::ship::{Ship, ShipId, ShipValidationError};
use crate::repo::ship_repo::ShipRepository;
use crate::repo::RepoError;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Errors from ship service operations.
#[derive(Debug)]
pub enum ShipServiceError {
    /// Ship at `index` in the submitted batch has tonnage `<= 0`.
    InvalidTonnage { index: usize, tonnage: f64 },
    /// No persisted ship has this id.
    NotFound(ShipId),
    /// Repository-level failure.
    Repo(RepoError),
}

impl Display for ShipServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTonnage { index, tonnage } => write!(
                f,
                "invalid tonnage at batch index {index}: must be positive, got {tonnage}"
            ),
            Self::NotFound(id) => write!(f, "ship not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ShipServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ShipServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Ship service facade over repository implementations.
pub struct ShipService<R: ShipRepository> {
    repo: R,
}

impl<R: ShipRepository> ShipService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists `ships` all-or-nothing and returns them with assigned ids.
    ///
    /// # Contract
    /// - Output order matches input order.
    /// - On `InvalidTonnage` no ship from this call is durable.
    /// - An empty batch succeeds without touching storage.
    pub fn add_ships(&self, ships: &[Ship]) -> Result<Vec<Ship>, ShipServiceError> {
        let started_at = Instant::now();

        if let Some((index, err)) = first_invalid(ships) {
            let ShipValidationError::InvalidTonnage { tonnage } = err;
            warn!(
                "event=ship_batch_add module=service status=rejected count={} index={} error_code=invalid_tonnage",
                ships.len(),
                index
            );
            return Err(ShipServiceError::InvalidTonnage { index, tonnage });
        }

        if ships.is_empty() {
            return Ok(Vec::new());
        }

        let persisted = self.repo.create_ships(ships).map_err(|err| {
            warn!(
                "event=ship_batch_add module=service status=error count={} error={}",
                ships.len(),
                err
            );
            ShipServiceError::from(err)
        })?;

        info!(
            "event=ship_batch_add module=service status=ok count={} duration_ms={}",
            persisted.len(),
            started_at.elapsed().as_millis()
        );
        Ok(persisted)
    }

    /// Persists one ship; same rules as a batch of one.
    pub fn add_ship(&self, ship: &Ship) -> Result<Ship, ShipServiceError> {
        let mut persisted = self.add_ships(std::slice::from_ref(ship))?;
        persisted.pop().ok_or_else(|| {
            ShipServiceError::Repo(RepoError::InvalidData(
                "ship batch of one returned no rows".to_string(),
            ))
        })
    }

    /// Lists every persisted ship in ascending id order.
    pub fn get_all_ships(&self) -> Result<Vec<Ship>, ShipServiceError> {
        Ok(self.repo.find_all_ships()?)
    }

    /// Gets one persisted ship by id.
    pub fn get_ship_by_id(&self, id: ShipId) -> Result<Ship, ShipServiceError> {
        self.repo
            .find_ship_by_id(id)?
            .ok_or(ShipServiceError::NotFound(id))
    }
}

fn first_invalid(ships: &[Ship]) -> Option<(usize, ShipValidationError)> {
    ships
        .iter()
        .enumerate()
        .find_map(|(index, ship)| ship.validate().err().map(|err| (index, err)))
}
