//! Container use-case service.
//!
//! # Invariants
//! - The first container with non-positive weight rejects the whole batch.
//! - Nothing from a rejected batch is written.

use crate::model::container::{Container, ContainerId, ContainerValidationError};
use crate::repo::container_repo::ContainerRepository;
use crate::repo::RepoError;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Errors from container service operations.
#[derive(Debug)]
pub enum ContainerServiceError {
    /// Container at `index` in the submitted batch has weight `<= 0`.
    NegativeWeight { index: usize, weight: f64 },
    NotFound(ContainerId),
    Repo(RepoError),
}

impl Display for ContainerServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeWeight { index, weight } => write!(
                f,
                "non-positive weight at batch index {index}: must be positive, got {weight}"
            ),
            Self::NotFound(id) => write!(f, "container not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ContainerServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ContainerServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Container service facade over repository implementations.
pub struct ContainerService<R: ContainerRepository> {
    repo: R,
}

impl<R: ContainerRepository> ContainerService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists `containers` all-or-nothing and returns them with assigned ids.
    pub fn add_containers(
        &self,
        containers: &[Container],
    ) -> Result<Vec<Container>, ContainerServiceError> {
        let started_at = Instant::now();

        if let Some((index, err)) = first_invalid(containers) {
            let ContainerValidationError::NegativeWeight { weight } = err;
            warn!(
                "event=container_batch_add module=service status=rejected count={} index={} error_code=negative_weight",
                containers.len(),
                index
            );
            return Err(ContainerServiceError::NegativeWeight { index, weight });
        }

        if containers.is_empty() {
            return Ok(Vec::new());
        }

        let persisted = self.repo.create_containers(containers).map_err(|err| {
            warn!(
                "event=container_batch_add module=service status=error count={} error={}",
                containers.len(),
                err
            );
            ContainerServiceError::from(err)
        })?;

        info!(
            "event=container_batch_add module=service status=ok count={} duration_ms={}",
            persisted.len(),
            started_at.elapsed().as_millis()
        );
        Ok(persisted)
    }

    /// Persists one container; same rules as a batch of one.
    pub fn add_container(&self, container: &Container) -> Result<Container, ContainerServiceError> {
        let mut persisted = self.add_containers(std::slice::from_ref(container))?;
        persisted.pop().ok_or_else(|| {
            ContainerServiceError::Repo(RepoError::InvalidData(
                "container batch of one returned no rows".to_string(),
            ))
        })
    }

    pub fn get_all_containers(&self) -> Result<Vec<Container>, ContainerServiceError> {
        Ok(self.repo.find_all_containers()?)
    }

    /// Gets one persisted container by id.
    pub fn get_container_by_id(&self, id: ContainerId) -> Result<Container, ContainerServiceError> {
        self.repo
            .find_container_by_id(id)?
            .ok_or(ContainerServiceError::NotFound(id))
    }
}

fn first_invalid(containers: &[Container]) -> Option<(usize, ContainerValidationError)> {
    containers
        .iter()
        .enumerate()
        .find_map(|(index, container)| container.validate().err().map(|err| (index, err)))
}
