//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the contact store contract used by services and the codec.
//! - Keep SQLite query details out of service orchestration.
//!
//! # Invariants
//! - "Not found" is a boolean/`None` result, never an error.
//! - Storage failures surface as `StorageError`, never swallowed.

pub mod contact_repo;
