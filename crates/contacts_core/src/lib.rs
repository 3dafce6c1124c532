//! Core persistence and import/export logic for the contacts app.
//! Presentation layers call into this crate; they never touch SQL or the
//! interchange grammar directly.

pub mod codec;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use codec::line_format::{
    export_contacts, export_to_path, import_from_path, import_from_reader, parse_line,
    CodecError, CodecResult, ImportReport, InvalidLineReason, LineDiagnostic, ParsedLine,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact::{
    validate_contact_input, Contact, ContactId, ContactInput, ContactValidationError,
};
pub use repo::contact_repo::{
    ContactRepository, SqliteContactRepository, StorageError, StorageResult,
};
pub use service::contact_service::ContactService;
pub use service::transfer_service::{summarize_import, Outcome, TransferService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
