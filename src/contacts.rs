//! Persistence operations for contact records.
//!
//! The store is always passed in by the caller. Natural-key uniqueness is
//! checked here before every insert; the backend itself enforces nothing.

use thiserror::Error;

use crate::models::User;
use crate::store::{DocId, Document, DocumentStore, StoreError};
use crate::validation::{self, ValidationError};

/// Returned by [`User::save`] when a record with the same natural key exists.
pub const DUPLICATE: i64 = -1;

/// Errors raised while persisting a record.
#[derive(Error, Debug)]
pub enum ContactError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// The record was stored, but its id cannot be reported as an `i64`.
    #[error("document id {0} is out of range")]
    IdOutOfRange(DocId),
}

impl User {
    /// The stored document sharing this record's natural key, if any.
    pub fn db_instance<S: DocumentStore + ?Sized>(
        &self,
        store: &S,
    ) -> Result<Option<Document>, StoreError> {
        store.get(&self.natural_key())
    }

    /// Whether a record with this natural key is stored.
    pub fn exists<S: DocumentStore + ?Sized>(&self, store: &S) -> Result<bool, StoreError> {
        Ok(self.db_instance(store)?.is_some())
    }

    /// Check phone number then names.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::check_all(self)
    }

    /// Persist the record.
    ///
    /// With `validate` set, field checks run first and their error is
    /// returned untouched. Returns [`DUPLICATE`] without writing when the
    /// natural key is already taken, otherwise the new document id.
    pub fn save<S: DocumentStore + ?Sized>(
        &self,
        store: &mut S,
        validate: bool,
    ) -> Result<i64, ContactError> {
        if validate {
            self.validate()?;
        }

        if self.exists(&*store)? {
            tracing::debug!(name = %self.full_name(), "record already stored");
            return Ok(DUPLICATE);
        }

        let id = store.insert(self.to_fields())?;
        i64::try_from(id).map_err(|_| ContactError::IdOutOfRange(id))
    }

    /// Remove the stored record with this natural key.
    ///
    /// Returns the removed id, or an empty list when nothing matched.
    pub fn delete<S: DocumentStore + ?Sized>(
        &self,
        store: &mut S,
    ) -> Result<Vec<DocId>, StoreError> {
        match self.db_instance(&*store)? {
            Some(doc) => store.remove(&[doc.id]),
            None => Ok(Vec::new()),
        }
    }
}

/// Every stored record, in id order.
pub fn get_all_users<S: DocumentStore + ?Sized>(store: &S) -> Result<Vec<User>, StoreError> {
    store.all()?.iter().map(User::from_document).collect()
}
