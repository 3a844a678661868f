//! File-backed document store.
//!
//! Persists every table into one JSON file shaped like
//! `{"_default": {"1": {...}, "2": {...}}}`. The file is read on every
//! operation and rewritten after every mutation, so what is on disk is
//! always the source of truth. Rewrites go through a temporary file in the
//! same directory that is then renamed over the database.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::{DocId, Document, DocumentStore, Fields, Query, StoreError};

type Table = BTreeMap<DocId, Fields>;
type Tables = BTreeMap<String, Table>;

/// Document store persisted to a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    table: String,
    indent: usize,
    /// Highest id this handle has inserted; never handed out again.
    last_id: DocId,
}

impl JsonFileStore {
    /// Open a store at `path` using the default table and indentation.
    ///
    /// The file does not need to exist yet; it is created on first write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            table: crate::constants::DEFAULT_TABLE.to_string(),
            indent: crate::constants::DEFAULT_INDENT,
            last_id: 0,
        }
    }

    /// Use a different table inside the same file.
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Set the number of spaces used when pretty-printing the file.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    fn read_tables(&self) -> Result<Tables, StoreError> {
        if !self.path.exists() {
            return Ok(Tables::new());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| StoreError::Read {
            path: self.path.clone(),
            source: e,
        })?;
        if content.trim().is_empty() {
            return Ok(Tables::new());
        }

        serde_json::from_str(&content).map_err(|e| StoreError::Parse {
            path: self.path.clone(),
            source: e,
        })
    }

    fn read_table(&self) -> Result<Table, StoreError> {
        Ok(self.read_tables()?.remove(&self.table).unwrap_or_default())
    }

    fn write_tables(&self, tables: &Tables) -> Result<(), StoreError> {
        let write_err = |e: std::io::Error| StoreError::Write {
            path: self.path.clone(),
            source: e,
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).map_err(write_err)?;

        let indent = " ".repeat(self.indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        tables
            .serialize(&mut serializer)
            .map_err(|e| StoreError::Write {
                path: self.path.clone(),
                source: std::io::Error::from(e),
            })?;

        // A crash mid-write leaves the old file intact.
        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(&buf).map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(&self.path).map_err(|e| write_err(e.error))?;
        Ok(())
    }

    /// Load all tables, let `f` mutate this store's table, then persist.
    ///
    /// Nothing is written when `f` fails.
    fn update<T>(
        &self,
        f: impl FnOnce(&mut Table) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut tables = self.read_tables()?;
        let table = tables.entry(self.table.clone()).or_default();
        let out = f(table)?;
        self.write_tables(&tables)?;
        Ok(out)
    }
}

impl DocumentStore for JsonFileStore {
    fn insert(&mut self, fields: Fields) -> Result<DocId, StoreError> {
        let last_id = self.last_id;
        let id = self.update(|table| {
            let id = super::next_id(table, last_id)?;
            table.insert(id, fields);
            Ok(id)
        })?;
        self.last_id = id;
        tracing::debug!(id, path = %self.path.display(), table = %self.table, "inserted document");
        Ok(id)
    }

    fn remove(&mut self, ids: &[DocId]) -> Result<Vec<DocId>, StoreError> {
        let removed = self.update(|table| {
            Ok(ids
                .iter()
                .copied()
                .filter(|id| table.remove(id).is_some())
                .collect::<Vec<_>>())
        })?;
        tracing::debug!(?removed, path = %self.path.display(), "removed documents");
        Ok(removed)
    }

    fn get(&self, query: &Query) -> Result<Option<Document>, StoreError> {
        Ok(self
            .read_table()?
            .into_iter()
            .find(|(_, fields)| query.matches(fields))
            .map(|(id, fields)| Document::new(id, fields)))
    }

    fn all(&self) -> Result<Vec<Document>, StoreError> {
        Ok(self
            .read_table()?
            .into_iter()
            .map(|(id, fields)| Document::new(id, fields))
            .collect())
    }
}
