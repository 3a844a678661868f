//! Document store contract and backends.
//!
//! A store holds flat JSON documents keyed by an auto-assigned integer id
//! and answers equality queries by linear scan. Two backends ship:
//! [`MemoryStore`] for tests and throwaway sessions, and [`JsonFileStore`]
//! which persists everything to a single pretty-printed JSON file.

pub mod json;
pub mod memory;

use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

pub use json::JsonFileStore;
pub use memory::MemoryStore;

/// Identifier assigned to a document on insert. Ids start at 1.
pub type DocId = u64;

/// Field-name to value mapping of a single document (insertion order kept).
pub type Fields = serde_json::Map<String, Value>;

/// Id for the next insert: one past the highest id either stored in `docs`
/// or already handed out by this handle (`last_issued`, 0 if none).
pub(crate) fn next_id<V>(
    docs: &std::collections::BTreeMap<DocId, V>,
    last_issued: DocId,
) -> Result<DocId, StoreError> {
    let last = docs.keys().next_back().copied().unwrap_or(0).max(last_issued);
    last.checked_add(1).ok_or(StoreError::IdsExhausted { last })
}

/// Errors raised by store backends.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read database {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write database {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse database {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("document {id} is malformed: {reason}")]
    InvalidDocument { id: DocId, reason: String },

    #[error("no document id left after {last}")]
    IdsExhausted { last: DocId },
}

/// A stored document together with its id.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocId,
    pub fields: Fields,
}

impl Document {
    pub fn new(id: DocId, fields: Fields) -> Self {
        Self { id, fields }
    }

    /// Look up a single field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }
}

/// Conjunction of field-equality conditions.
///
/// An empty query matches every document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    conditions: Vec<(String, Value)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `field` to equal `value`.
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions.push((field.into(), value.into()));
        self
    }

    /// Whether every condition holds for `fields`. A missing field never matches.
    pub fn matches(&self, fields: &Fields) -> bool {
        self.conditions
            .iter()
            .all(|(field, value)| fields.get(field) == Some(value))
    }
}

/// Operations a backend must provide.
///
/// Mutating calls take `&mut self`; the store is single-writer and callers
/// pass it explicitly to whatever needs it.
pub trait DocumentStore {
    /// Append a new document and return its freshly assigned id.
    fn insert(&mut self, fields: Fields) -> Result<DocId, StoreError>;

    /// Remove the given ids, returning the ones that were actually present.
    fn remove(&mut self, ids: &[DocId]) -> Result<Vec<DocId>, StoreError>;

    /// First document (in id order) matching `query`.
    fn get(&self, query: &Query) -> Result<Option<Document>, StoreError>;

    /// Every document, in id order.
    fn all(&self) -> Result<Vec<Document>, StoreError>;

    /// Every document matching `query`, in id order.
    fn search(&self, query: &Query) -> Result<Vec<Document>, StoreError> {
        Ok(self
            .all()?
            .into_iter()
            .filter(|doc| query.matches(&doc.fields))
            .collect())
    }

    /// Whether at least one document matches `query`.
    fn contains(&self, query: &Query) -> Result<bool, StoreError> {
        Ok(self.get(query)?.is_some())
    }

    fn len(&self) -> Result<usize, StoreError> {
        Ok(self.all()?.len())
    }

    fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}
