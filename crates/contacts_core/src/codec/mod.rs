//! Interchange codec for bulk contact transfer.
//!
//! # Responsibility
//! - Serialize contacts to the `<name>, <phone>` line format.
//! - Parse that format back, collecting per-line diagnostics.
//!
//! # Invariants
//! - Malformed lines never abort an import.
//! - Only I/O and storage failures are raised as errors.

pub mod line_format;
