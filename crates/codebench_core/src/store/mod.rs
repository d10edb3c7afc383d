//! Saved-document storage backed by redb.

/// Table definitions.
pub mod tables;

use crate::error::StoreError;
use crate::models::document::Document;
use chrono::{DateTime, Utc};
use redb::{Database, ReadableDatabase, ReadableTable};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Snapshot of a document as written by [`DocumentStore::save`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavedDocument {
    pub id: String,
    pub name: String,
    pub language: String,
    pub content: String,
    pub saved_at: DateTime<Utc>,
}

impl SavedDocument {
    fn from_document(document: &Document) -> Self {
        Self {
            id: document.id.clone(),
            name: document.name.clone(),
            language: document.language.clone(),
            content: document.content.clone(),
            saved_at: Utc::now(),
        }
    }
}

/// Destination for document snapshots.
///
/// This is the persistence seam the application depends on; the workspace
/// core never assumes anything beyond "snapshot keyed by document id".
pub trait DocumentSink {
    /// Persist a snapshot of `document`.
    ///
    /// # Errors
    /// Returns a [`StoreError`] when the snapshot cannot be written.
    fn save(&self, document: &Document) -> Result<(), StoreError>;
}

/// redb-backed document store.
pub struct DocumentStore {
    db: Database,
}

impl DocumentStore {
    /// Open (or create) the store under `dir`.
    ///
    /// # Errors
    /// Returns an error when the directory cannot be created or the database
    /// cannot be opened.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        let db = Database::create(dir.join(tables::REDB_FILE_NAME))?;
        Ok(Self { db })
    }

    /// Fetch a saved snapshot by document id.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] when no snapshot exists for `id`.
    pub fn load(&self, id: &str) -> Result<SavedDocument, StoreError> {
        let tx = self.db.begin_read()?;
        let table = match tx.open_table(tables::DOCUMENTS) {
            Ok(table) => table,
            Err(redb::TableError::TableDoesNotExist(_)) => return Err(StoreError::NotFound),
            Err(err) => return Err(err.into()),
        };
        let Some(value) = table.get(id)? else {
            return Err(StoreError::NotFound);
        };
        Ok(bincode::deserialize(value.value())?)
    }

    /// All saved snapshots, most recent first.
    ///
    /// # Errors
    /// Returns an error when the table cannot be read or a row fails to
    /// decode.
    pub fn list(&self) -> Result<Vec<SavedDocument>, StoreError> {
        let tx = self.db.begin_read()?;
        let table = match tx.open_table(tables::DOCUMENTS) {
            Ok(table) => table,
            Err(redb::TableError::TableDoesNotExist(_)) => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        let mut rows = Vec::new();
        for entry in table.iter()? {
            let (_, value) = entry?;
            rows.push(bincode::deserialize::<SavedDocument>(value.value())?);
        }
        rows.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
        Ok(rows)
    }

    /// Remove a saved snapshot.
    ///
    /// # Returns
    /// `Ok(true)` if a snapshot was removed, `Ok(false)` if none existed.
    ///
    /// # Errors
    /// Returns an error when the write transaction fails.
    pub fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let tx = self.db.begin_write()?;
        let removed = {
            let mut table = tx.open_table(tables::DOCUMENTS)?;
            let existed = table.remove(id)?.is_some();
            existed
        };
        tx.commit()?;
        Ok(removed)
    }
}

impl DocumentSink for DocumentStore {
    fn save(&self, document: &Document) -> Result<(), StoreError> {
        let record = SavedDocument::from_document(document);
        let encoded = bincode::serialize(&record)?;
        let tx = self.db.begin_write()?;
        {
            let mut table = tx.open_table(tables::DOCUMENTS)?;
            table.insert(record.id.as_str(), encoded.as_slice())?;
        }
        tx.commit()?;
        debug!(id = %record.id, name = %record.name, "saved document snapshot");
        Ok(())
    }
}
