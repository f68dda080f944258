//! Ship domain model.
//!
//! # Invariants
//! - `tonnage` must be strictly positive (`> 0`); `0` and NaN are rejected.
//! - `id` is assigned by storage and never changed afterwards.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned ship identity.
pub type ShipId = i64;

/// A ship record. Transient until `id` is set by the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ShipId>,
    pub name: String,
    /// Displacement in tonnes.
    pub tonnage: f64,
}

/// Validation failure for a single ship.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShipValidationError {
    /// Tonnage is zero, negative or not a number.
    InvalidTonnage { tonnage: f64 },
}

impl Display for ShipValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTonnage { tonnage } => {
                write!(f, "ship tonnage must be positive, got {tonnage}")
            }
        }
    }
}

impl Error for ShipValidationError {}

impl Ship {
    /// Creates a transient ship (no id).
    pub fn new(name: impl Into<String>, tonnage: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            tonnage,
        }
    }

    /// Checks the positivity rule.
    pub fn validate(&self) -> Result<(), ShipValidationError> {
        if self.tonnage > 0.0 {
            Ok(())
        } else {
            Err(ShipValidationError::InvalidTonnage {
                tonnage: self.tonnage,
            })
        }
    }

    /// Returns whether storage has assigned an id.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub(crate) fn with_id(mut self, id: ShipId) -> Self {
        self.id = Some(id);
        self
    }
}
