//! Line-oriented contact interchange format.
//!
//! Each record is one line: `<name>, <phone>`. The phone is a run of
//! decimal digits at the end of the line; the name is everything before
//! the last comma that precedes that run. Names cannot escape commas, so a
//! name ending in `, <digits>` is ambiguous.

use crate::model::contact::Contact;
use crate::repo::contact_repo::{ContactRepository, StorageError};
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

static CONTACT_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?),\s*(\d+)$").expect("valid contact line regex"));
static LINE_BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r\n|\r|\n").expect("valid line break regex"));

pub type CodecResult<T> = Result<T, CodecError>;

/// Codec-level failure for export/import.
#[derive(Debug)]
pub enum CodecError {
    /// Export was asked to write zero contacts.
    EmptyInput,
    /// Reading or writing the interchange stream failed.
    Io(io::Error),
    /// The store rejected an insert during import.
    Storage(StorageError),
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "There are no contacts to export."),
            Self::Io(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyInput => None,
            Self::Io(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<io::Error> for CodecError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<StorageError> for CodecError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Why an import line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidLineReason {
    MissingField,
    InvalidFormat,
}

impl Display for InvalidLineReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField => write!(f, "Missing name or phone"),
            Self::InvalidFormat => write!(f, "Invalid format"),
        }
    }
}

/// One rejected import line, 1-indexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDiagnostic {
    pub line_number: usize,
    pub reason: InvalidLineReason,
}

impl Display for LineDiagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line {}: {}", self.line_number, self.reason)
    }
}

/// Result of one import pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Number of contacts added to the store.
    pub imported: usize,
    /// Rejected lines in file order.
    pub diagnostics: Vec<LineDiagnostic>,
}

/// Classification of a single interchange line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine<'a> {
    /// Empty after trimming; ignored.
    Blank,
    Record { name: &'a str, phone: &'a str },
    Invalid(InvalidLineReason),
}

/// Classifies one raw line without touching the store.
pub fn parse_line(raw: &str) -> ParsedLine<'_> {
    let line = raw.trim();
    if line.is_empty() {
        return ParsedLine::Blank;
    }

    let Some(captures) = CONTACT_LINE_RE.captures(line) else {
        return ParsedLine::Invalid(InvalidLineReason::InvalidFormat);
    };

    let name = captures.get(1).map_or("", |m| m.as_str().trim());
    let phone = captures.get(2).map_or("", |m| m.as_str().trim());
    if name.is_empty() || phone.is_empty() {
        return ParsedLine::Invalid(InvalidLineReason::MissingField);
    }

    ParsedLine::Record { name, phone }
}

/// Writes one `<name>, <phone>` line per contact, in slice order.
///
/// # Errors
/// - [`CodecError::EmptyInput`] when `contacts` is empty; nothing is written.
/// - [`CodecError::Io`] when the writer fails.
pub fn export_contacts<W: Write>(contacts: &[Contact], writer: W) -> CodecResult<()> {
    if contacts.is_empty() {
        return Err(CodecError::EmptyInput);
    }

    let mut writer = BufWriter::new(writer);
    for contact in contacts {
        writeln!(writer, "{}, {}", contact.name, contact.phone)?;
    }
    writer.flush()?;
    Ok(())
}

/// Exports contacts to a file, creating or truncating it.
///
/// The emptiness check runs before the file is created.
pub fn export_to_path(contacts: &[Contact], path: impl AsRef<Path>) -> CodecResult<()> {
    if contacts.is_empty() {
        return Err(CodecError::EmptyInput);
    }

    let file = File::create(path.as_ref())?;
    export_contacts(contacts, file)?;
    info!(
        "event=contacts_export module=codec status=ok count={}",
        contacts.len()
    );
    Ok(())
}

/// Imports every valid line from `reader` into `store`.
///
/// Lines may end in `\n`, `\r\n` or a lone `\r`. Invalid lines are
/// recorded and skipped. Each valid line is inserted on its own, so a
/// failure part-way leaves earlier rows in place.
///
/// # Errors
/// - [`CodecError::Io`] when reading fails or the input is not UTF-8.
/// - [`CodecError::Storage`] when the store rejects an insert.
pub fn import_from_reader<R, S>(mut reader: R, store: &S) -> CodecResult<ImportReport>
where
    R: Read,
    S: ContactRepository + ?Sized,
{
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut report = ImportReport::default();
    for (index, line) in LINE_BREAK_RE.split(&text).enumerate() {
        let line_number = index + 1;
        match parse_line(line) {
            ParsedLine::Blank => {}
            ParsedLine::Record { name, phone } => {
                store.add(name, phone)?;
                report.imported += 1;
            }
            ParsedLine::Invalid(reason) => {
                debug!(
                    "event=contacts_import_line module=codec status=rejected line={line_number} reason={reason:?}"
                );
                report.diagnostics.push(LineDiagnostic {
                    line_number,
                    reason,
                });
            }
        }
    }

    info!(
        "event=contacts_import module=codec status=ok imported={} rejected={}",
        report.imported,
        report.diagnostics.len()
    );
    Ok(report)
}

/// Opens `path` and imports it with [`import_from_reader`].
pub fn import_from_path<S>(path: impl AsRef<Path>, store: &S) -> CodecResult<ImportReport>
where
    S: ContactRepository + ?Sized,
{
    let file = File::open(path.as_ref())?;
    import_from_reader(BufReader::new(file), store)
}
