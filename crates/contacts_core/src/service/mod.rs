//! Core use-case services.
//!
//! # Responsibility
//! - Give presentation code one handle for contact CRUD.
//! - Sequence store and codec calls for bulk export/import.
//!
//! # See also
//! - `codec::line_format` for the interchange grammar.

pub mod contact_service;
pub mod transfer_service;
