//! Contact use-case service.
//!
//! Thin pass-through over a [`ContactRepository`]. Input is not validated
//! here; entry forms call `validate_contact_input` first.

use crate::model::contact::{Contact, ContactId};
use crate::repo::contact_repo::{ContactRepository, StorageResult};

/// Use-case service wrapper for contact CRUD.
pub struct ContactService<R: ContactRepository> {
    repo: R,
}

impl<R: ContactRepository> ContactService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Borrows the underlying repository, e.g. to build a `TransferService`.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn add_contact(&self, name: &str, phone: &str) -> StorageResult<ContactId> {
        self.repo.add(name, phone)
    }

    /// Returns `false` when the contact no longer exists.
    pub fn update_contact(&self, id: ContactId, name: &str, phone: &str) -> StorageResult<bool> {
        self.repo.update(id, name, phone)
    }

    /// Returns `false` when the contact no longer exists.
    pub fn delete_contact(&self, id: ContactId) -> StorageResult<bool> {
        self.repo.delete(id)
    }

    pub fn get_contact(&self, id: ContactId) -> StorageResult<Option<Contact>> {
        self.repo.get(id)
    }

    pub fn list_contacts(&self) -> StorageResult<Vec<Contact>> {
        self.repo.list_all()
    }

    pub fn filter_contacts(&self, substring: &str) -> StorageResult<Vec<Contact>> {
        self.repo.filter(substring)
    }
}
