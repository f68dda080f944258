//! Container domain model.
//!
//! # Invariants
//! - `weight` must be strictly positive (`> 0`); `0` and NaN are rejected.
//! - `id` is assigned by storage and never changed afterwards.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned container identity.
pub type ContainerId = i64;

/// A cargo container record. Transient until `id` is set by the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ContainerId>,
    pub contents: String,
    pub weight: f64,
}

/// Validation failure for a single container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContainerValidationError {
    /// Weight is zero, negative or not a number.
    NegativeWeight { weight: f64 },
}

impl Display for ContainerValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeWeight { weight } => {
                write!(f, "container weight must be positive, got {weight}")
            }
        }
    }
}

impl Error for ContainerValidationError {}

impl Container {
    /// Creates a transient container (no id).
    pub fn new(contents: impl Into<String>, weight: f64) -> Self {
        Self {
            id: None,
            contents: contents.into(),
            weight,
        }
    }

    pub fn validate(&self) -> Result<(), ContainerValidationError> {
        if self.weight > 0.0 {
            Ok(())
        } else {
            Err(ContainerValidationError::NegativeWeight {
                weight: self.weight,
            })
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub(crate) fn with_id(mut self, id: ContainerId) -> Self {
        self.id = Some(id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{Container, ContainerValidationError};

    #[test]
    fn zero_weight_is_rejected() {
        let err = Container::new("air", 0.0).validate().unwrap_err();
        assert_eq!(err, ContainerValidationError::NegativeWeight { weight: 0.0 });
    }

    #[test]
    fn positive_weight_is_accepted() {
        assert!(Container::new("toys", 5.0).validate().is_ok());
    }

    #[test]
    fn serializes_without_id_while_transient() {
        let json = serde_json::to_value(Container::new("candy", 5.0)).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["contents"], "candy");
    }
}
