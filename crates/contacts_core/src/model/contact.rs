//! Contact entity and entry-form validation.
//!
//! # Responsibility
//! - Define the canonical contact record returned by the store.
//! - Provide the named validation step presentation code runs before
//!   calling `add`/`update`.
//!
//! # Invariants
//! - `id` is `None` only for records that were never persisted.
//! - The store does not call [`validate_contact_input`]; bulk import has
//!   its own digit grammar.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned contact identifier.
pub type ContactId = i64;

/// Canonical contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Assigned on insert, never reused after deletion.
    pub id: Option<ContactId>,
    pub name: String,
    pub phone: String,
}

impl Contact {
    /// Creates an unsaved contact.
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            phone: phone.into(),
        }
    }

    /// Returns whether this contact came from the store.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// Trimmed, validated entry-form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInput {
    pub name: String,
    pub phone: String,
}

/// Entry-form validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactValidationError {
    EmptyName,
    EmptyPhone,
    NonDigitPhone,
}

impl Display for ContactValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty."),
            Self::EmptyPhone => write!(f, "Phone cannot be empty."),
            Self::NonDigitPhone => write!(f, "Phone must contain only numbers."),
        }
    }
}

impl Error for ContactValidationError {}

/// Validates name/phone as typed into an entry form.
///
/// Both fields are trimmed first. Checks run in order: name present, phone
/// present, phone made of ASCII digits only.
///
/// # Errors
/// - Returns the first failed check as [`ContactValidationError`].
pub fn validate_contact_input(
    name: &str,
    phone: &str,
) -> Result<ContactInput, ContactValidationError> {
    let name = name.trim();
    let phone = phone.trim();

    if name.is_empty() {
        return Err(ContactValidationError::EmptyName);
    }
    if phone.is_empty() {
        return Err(ContactValidationError::EmptyPhone);
    }
    if !phone.chars().all(|ch| ch.is_ascii_digit()) {
        return Err(ContactValidationError::NonDigitPhone);
    }

    Ok(ContactInput {
        name: name.to_string(),
        phone: phone.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::{validate_contact_input, Contact, ContactValidationError};

    #[test]
    fn new_contact_is_not_persisted() {
        let contact = Contact::new("Ada", "555");
        assert_eq!(contact.id, None);
        assert!(!contact.is_persisted());
    }

    #[test]
    fn validation_trims_accepted_input() {
        let input = validate_contact_input("  Jane Smith ", " 0987654321 ").unwrap();
        assert_eq!(input.name, "Jane Smith");
        assert_eq!(input.phone, "0987654321");
    }

    #[test]
    fn validation_reports_first_failure_in_order() {
        assert_eq!(
            validate_contact_input("   ", "").unwrap_err(),
            ContactValidationError::EmptyName
        );
        assert_eq!(
            validate_contact_input("Jane", "  ").unwrap_err(),
            ContactValidationError::EmptyPhone
        );
        assert_eq!(
            validate_contact_input("Jane", "555-0100").unwrap_err(),
            ContactValidationError::NonDigitPhone
        );
    }

    #[test]
    fn validation_messages_are_user_facing() {
        assert_eq!(
            ContactValidationError::NonDigitPhone.to_string(),
            "Phone must contain only numbers."
        );
    }
}
