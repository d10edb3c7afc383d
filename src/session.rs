//! Editor session binding one text surface to the active document.
//!
//! Synchronization is one-directional per transition: `bind`/`push_to_surface`
//! write INTO the surface and are never reported back as edits, while user
//! edits flow OUT through [`EditorSession::pull_from_surface`]. Neither path
//! ever invokes the other.

use crate::surface::SurfaceBuffer;
use crate::syntax::{self, SyntaxProfile};
use codebench_core::{Document, LanguageDescriptor};
use std::ops::Range;
use tracing::debug;

/// A single edit applied to the bound surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Insert { at: usize, text: String },
    Delete { range: Range<usize> },
    Replace { range: Range<usize>, text: String },
}

/// Owns the one live editable surface and its syntax profile.
#[derive(Default)]
pub struct EditorSession {
    surface: SurfaceBuffer,
    bound_id: Option<String>,
    profile: Option<SyntaxProfile>,
}

impl EditorSession {
    /// A session with an empty surface and no language profile bound.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn surface(&self) -> &SurfaceBuffer {
        &self.surface
    }

    /// Id of the document currently bound to the surface.
    pub fn bound_id(&self) -> Option<&str> {
        self.bound_id.as_deref()
    }

    /// The syntax profile of the bound document, if any.
    pub fn profile(&self) -> Option<&SyntaxProfile> {
        self.profile.as_ref()
    }

    /// Bind the surface to `document`: reconfigure the syntax profile and
    /// replace the surface text with the document's stored content.
    pub fn bind(&mut self, document: &Document, language: &LanguageDescriptor) {
        self.profile = Some(syntax::profile_for(language));
        self.bound_id = Some(document.id.clone());
        self.push_to_surface(&document.content);
        debug!(id = %document.id, language = language.id, "bound editor surface");
    }

    /// Replace the surface text wholesale. Never reported back as an edit.
    pub fn push_to_surface(&mut self, content: &str) {
        self.surface.reset(content);
    }

    /// Apply a user edit to the surface.
    ///
    /// # Returns
    /// `true` when the surface changed (callers then pull and propagate).
    pub fn apply(&mut self, edit: &Edit) -> bool {
        match edit {
            Edit::Insert { at, text } => self.surface.insert_text(*at, text),
            Edit::Delete { range } => self.surface.delete_char_range(range.clone()),
            Edit::Replace { range, text } => {
                self.surface.replace_char_range(range.clone(), text)
            }
        }
    }

    /// Read the surface out for content propagation.
    ///
    /// # Returns
    /// The bound document id and a full text snapshot, or `None` when no
    /// document is bound.
    pub fn pull_from_surface(&self) -> Option<(String, String)> {
        self.bound_id
            .as_ref()
            .map(|id| (id.clone(), self.surface.snapshot()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn javascript() -> &'static LanguageDescriptor {
        codebench_core::languages::describe("javascript").expect("catalog entry")
    }

    #[test]
    fn fresh_sessions_are_unbound_and_empty() {
        let session = EditorSession::new();
        assert!(session.bound_id().is_none());
        assert!(session.profile().is_none());
        assert!(session.surface().is_empty());
        assert!(session.pull_from_surface().is_none());
    }

    #[test]
    fn bind_loads_content_and_profile() {
        let mut session = EditorSession::new();
        let document = Document::new("main.js", "javascript", "console.log(1);");

        session.bind(&document, javascript());

        assert_eq!(session.bound_id(), Some(document.id.as_str()));
        assert_eq!(session.surface().snapshot(), "console.log(1);");
        assert_eq!(
            session.profile().map(|profile| profile.language.as_str()),
            Some("javascript")
        );
    }

    #[test]
    fn edits_flow_out_through_pull() {
        let mut session = EditorSession::new();
        let document = Document::new("main.js", "javascript", "start");
        session.bind(&document, javascript());

        assert!(session.apply(&Edit::Insert {
            at: 5,
            text: " here".to_string(),
        }));

        let (id, text) = session.pull_from_surface().expect("bound");
        assert_eq!(id, document.id);
        assert_eq!(text, "start here");
    }

    #[test]
    fn rebinding_replaces_prior_surface_text() {
        let mut session = EditorSession::new();
        let first = Document::new("main.js", "javascript", "first");
        let second = Document::new("file2.js", "javascript", "second");

        session.bind(&first, javascript());
        session.apply(&Edit::Insert {
            at: 0,
            text: "edited ".to_string(),
        });
        session.bind(&second, javascript());

        assert_eq!(session.surface().snapshot(), "second");
        assert_eq!(session.bound_id(), Some(second.id.as_str()));
    }
}
