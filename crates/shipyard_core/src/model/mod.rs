//! Domain model for persisted shipping records.
//!
//! # Responsibility
//! - Define the record shapes handled by repositories and services.
//! - Own the positivity rule of each record kind.
//!
//! # Invariants
//! - `id` is `None` while a record is transient and `Some` once persisted.
//! - A record that fails `validate()` must never reach durable storage.

pub mod container;
pub mod ship;
