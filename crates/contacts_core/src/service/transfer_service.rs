//! Bulk export/import use-cases.
//!
//! # Responsibility
//! - Sequence store reads/writes with the interchange codec.
//! - Turn every result, including failures, into a displayable [`Outcome`].
//!
//! # Invariants
//! - Public operations never return `Err` and never panic.
//! - Import summaries list at most [`MAX_DIAGNOSTICS_SHOWN`] rejected lines.

use crate::codec::line_format::{export_to_path, import_from_path, CodecError, ImportReport};
use crate::repo::contact_repo::ContactRepository;
use log::{error, info, warn};
use std::path::Path;

/// Rejected lines spelled out in an import summary; the rest are counted.
pub const MAX_DIAGNOSTICS_SHOWN: usize = 5;

/// Displayable result of a compound operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub success: bool,
    pub message: String,
}

impl Outcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Export/import facade over a contact repository.
pub struct TransferService<R: ContactRepository> {
    repo: R,
}

impl<R: ContactRepository> TransferService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Writes every stored contact to `destination`.
    ///
    /// An empty store fails without creating the file.
    pub fn export_all(&self, destination: impl AsRef<Path>) -> Outcome {
        let destination = destination.as_ref();
        let contacts = match self.repo.list_all() {
            Ok(contacts) => contacts,
            Err(err) => {
                error!("event=export_all module=service status=error stage=list error={err}");
                return Outcome::failure(format!("Error exporting contacts: {err}"));
            }
        };

        if contacts.is_empty() {
            warn!("event=export_all module=service status=empty");
            return Outcome::failure(CodecError::EmptyInput.to_string());
        }

        match export_to_path(&contacts, destination) {
            Ok(()) => {
                info!(
                    "event=export_all module=service status=ok count={}",
                    contacts.len()
                );
                Outcome::success(format!(
                    "Contacts successfully exported to {}",
                    destination.display()
                ))
            }
            Err(err) => {
                error!("event=export_all module=service status=error stage=write error={err}");
                Outcome::failure(format!("Error exporting contacts: {err}"))
            }
        }
    }

    /// Imports every valid line of `source` and summarizes the result.
    pub fn import_all(&self, source: impl AsRef<Path>) -> Outcome {
        match import_from_path(source.as_ref(), &self.repo) {
            Ok(report) => summarize_import(&report),
            Err(err) => {
                error!("event=import_all module=service status=error error={err}");
                Outcome::failure(format!("Error importing contacts: {err}"))
            }
        }
    }
}

/// Builds the user-facing import summary.
pub fn summarize_import(report: &ImportReport) -> Outcome {
    let rejected = report.diagnostics.len();

    if report.imported == 0 {
        if rejected > 0 {
            return Outcome::failure(format!(
                "No contacts were imported. {rejected} line(s) had invalid format."
            ));
        }
        return Outcome::failure("No contacts were found in the file.");
    }

    let mut message = format!("Successfully imported {} contact(s)", report.imported);
    if rejected > 0 {
        message.push_str(&format!(
            "\n\nWarning: {rejected} line(s) could not be imported:"
        ));
        for diagnostic in report.diagnostics.iter().take(MAX_DIAGNOSTICS_SHOWN) {
            message.push_str(&format!("\n- {diagnostic}"));
        }
        if rejected > MAX_DIAGNOSTICS_SHOWN {
            message.push_str(&format!(
                "\n- ...and {} more",
                rejected - MAX_DIAGNOSTICS_SHOWN
            ));
        }
    }

    Outcome::success(message)
}
