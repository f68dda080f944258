//! Core use-case services.
//!
//! # Responsibility
//! - Enforce the all-or-nothing batch contract above the repository layer.
//! - Translate repository results into use-case errors (`NotFound`, typed
//!   validation failures).
//!
//! # Invariants
//! - A batch is validated in full before any write is attempted.
//! - Services never retry; a rejected batch must be corrected by the caller.

pub mod container_service;
pub mod ship_service;
