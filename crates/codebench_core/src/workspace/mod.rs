//! Open-document set, active selection, and document lifecycle.
//!
//! Invariants maintained by every operation:
//! - the workspace always contains at least one document;
//! - `active_id` always names a document in the set;
//! - document order is insertion order (tab display order).

use crate::error::WorkspaceError;
use crate::languages;
use crate::models::document::Document;
use crate::naming;
use tracing::debug;

/// The set of open documents plus the active selection.
#[derive(Debug, Clone)]
pub struct Workspace {
    documents: Vec<Document>,
    active_id: String,
}

impl Workspace {
    /// Open a workspace seeded with a single `main.js` document holding the
    /// JavaScript starter template.
    pub fn new() -> Self {
        let language = languages::describe(languages::JAVASCRIPT_ID)
            .expect("seed language is in the catalog");
        let seed = Document::new(
            naming::main_file_name(language.extension),
            language.id,
            language.template,
        );
        let active_id = seed.id.clone();
        Self {
            documents: vec![seed],
            active_id,
        }
    }

    /// Open documents in tab display order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Id of the active document.
    pub fn active_id(&self) -> &str {
        &self.active_id
    }

    /// The active document.
    pub fn get_active(&self) -> &Document {
        // active_id always names a member of `documents`.
        self.documents
            .iter()
            .find(|document| document.id == self.active_id)
            .expect("active document present")
    }

    /// Look up a document by id.
    ///
    /// # Errors
    /// Returns [`WorkspaceError::UnknownDocument`] when no document has `id`.
    pub fn document(&self, id: &str) -> Result<&Document, WorkspaceError> {
        self.documents
            .iter()
            .find(|document| document.id == id)
            .ok_or_else(|| WorkspaceError::UnknownDocument(id.to_string()))
    }

    /// Open a new empty document in `language` and make it active.
    ///
    /// The name is `file{N}.{ext}` where `N` counts the documents open before
    /// this call, plus one.
    ///
    /// # Errors
    /// Returns [`WorkspaceError::UnknownLanguage`] for ids outside the
    /// catalog.
    pub fn new_document(&mut self, language: &str) -> Result<&Document, WorkspaceError> {
        let descriptor = languages::describe(language)?;
        let name = naming::numbered_file_name(self.documents.len() + 1, descriptor.extension);
        let document = Document::new(name, descriptor.id, "");
        self.active_id = document.id.clone();
        debug!(id = %document.id, name = %document.name, "opened document");
        self.documents.push(document);
        Ok(self.documents.last().expect("document just pushed"))
    }

    /// Switch a document to a new language.
    ///
    /// This is destructive: the name becomes `main.{ext}` and the content is
    /// reset to the language's starter template.
    ///
    /// # Errors
    /// Returns [`WorkspaceError::UnknownDocument`] or
    /// [`WorkspaceError::UnknownLanguage`]; on error nothing is mutated.
    pub fn change_language(
        &mut self,
        id: &str,
        language: &str,
    ) -> Result<&Document, WorkspaceError> {
        let descriptor = languages::describe(language)?;
        let index = self.index_of(id)?;
        let document = &mut self.documents[index];
        document.language = descriptor.id.to_string();
        document.name = naming::main_file_name(descriptor.extension);
        document.content = descriptor.template.to_string();
        debug!(id = %document.id, language = descriptor.id, "changed document language");
        Ok(&self.documents[index])
    }

    /// Close a document.
    ///
    /// If the closed document was active, activation moves to the first
    /// remaining document in tab order.
    ///
    /// # Errors
    /// Returns [`WorkspaceError::CannotCloseLastDocument`] when only one
    /// document is open (nothing is mutated), or
    /// [`WorkspaceError::UnknownDocument`].
    pub fn close_document(&mut self, id: &str) -> Result<(), WorkspaceError> {
        if self.documents.len() == 1 {
            return Err(WorkspaceError::CannotCloseLastDocument);
        }
        let index = self.index_of(id)?;
        let closed = self.documents.remove(index);
        if self.active_id == closed.id {
            self.active_id = self.documents[0].id.clone();
        }
        debug!(id = %closed.id, "closed document");
        Ok(())
    }

    /// Make a document active.
    ///
    /// # Errors
    /// Returns [`WorkspaceError::UnknownDocument`] when no document has `id`.
    pub fn set_active(&mut self, id: &str) -> Result<(), WorkspaceError> {
        let index = self.index_of(id)?;
        self.active_id = self.documents[index].id.clone();
        Ok(())
    }

    /// Replace a document's content wholesale.
    ///
    /// Called once per edit notification from the editor session; repeated
    /// identical calls are no-ops beyond the write itself, and this never
    /// feeds back into the editor surface.
    ///
    /// # Errors
    /// Returns [`WorkspaceError::UnknownDocument`] when no document has `id`.
    pub fn update_content(&mut self, id: &str, content: &str) -> Result<(), WorkspaceError> {
        let index = self.index_of(id)?;
        let document = &mut self.documents[index];
        if document.content != content {
            document.content = content.to_string();
        }
        Ok(())
    }

    fn index_of(&self, id: &str) -> Result<usize, WorkspaceError> {
        self.documents
            .iter()
            .position(|document| document.id == id)
            .ok_or_else(|| WorkspaceError::UnknownDocument(id.to_string()))
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
