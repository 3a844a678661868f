//! In-memory document store.

use std::collections::BTreeMap;

use super::{DocId, Document, DocumentStore, Fields, Query, StoreError};

/// Document store that lives only as long as the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    docs: BTreeMap<DocId, Fields>,
    last_id: DocId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for MemoryStore {
    fn insert(&mut self, fields: Fields) -> Result<DocId, StoreError> {
        let id = super::next_id(&self.docs, self.last_id)?;
        self.last_id = id;
        self.docs.insert(id, fields);
        tracing::debug!(id, "inserted document in memory");
        Ok(id)
    }

    fn remove(&mut self, ids: &[DocId]) -> Result<Vec<DocId>, StoreError> {
        Ok(ids
            .iter()
            .copied()
            .filter(|id| self.docs.remove(id).is_some())
            .collect())
    }

    fn get(&self, query: &Query) -> Result<Option<Document>, StoreError> {
        Ok(self
            .docs
            .iter()
            .find(|(_, fields)| query.matches(fields))
            .map(|(id, fields)| Document::new(*id, fields.clone())))
    }

    fn all(&self) -> Result<Vec<Document>, StoreError> {
        Ok(self
            .docs
            .iter()
            .map(|(id, fields)| Document::new(*id, fields.clone()))
            .collect())
    }
}
