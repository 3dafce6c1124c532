//! Contact domain model.
//!
//! # Invariants
//! - A persisted contact always carries a store-assigned `ContactId`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod contact;
