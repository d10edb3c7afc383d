//! Application glue wiring workspace, session, engine, and console.
//!
//! Every user-level operation lives here so the one-directional sync rules
//! hold in exactly one place: binding writes into the surface, edits pull out
//! of it, and the two never nest.

use crate::console::OutputConsole;
use crate::session::{Edit, EditorSession};
use codebench_core::store::DocumentSink;
use codebench_core::{
    languages, Config, Notice, NoticeQueue, StoreError, Workspace, WorkspaceError,
};
use codebench_engine::{EngineConfig, EngineError, ExecutionEngine, ExecutionResult};
use std::time::Duration;
use tracing::warn;

/// Outcome of a run request issued through the playground.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    /// The engine ran and reported a result (now appended to the console).
    Completed(ExecutionResult),
    /// A run was already in flight; nothing changed.
    Rejected,
}

/// The workspace application: documents, editor session, run pipeline,
/// console, and pending notices.
pub struct Playground {
    workspace: Workspace,
    session: EditorSession,
    engine: ExecutionEngine,
    console: OutputConsole,
    notices: NoticeQueue,
}

impl Playground {
    /// Open a playground with the seed document bound to the surface.
    pub fn new(config: &Config) -> Self {
        let engine = ExecutionEngine::new(EngineConfig {
            timeout: config.run_timeout_ms.map(Duration::from_millis),
        });
        let mut playground = Self {
            workspace: Workspace::new(),
            session: EditorSession::new(),
            engine,
            console: OutputConsole::with_max_lines(config.max_console_lines),
            notices: NoticeQueue::new(),
        };
        playground.bind_active();
        playground
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    pub fn console(&self) -> &OutputConsole {
        &self.console
    }

    pub fn engine(&self) -> &ExecutionEngine {
        &self.engine
    }

    /// Take every pending notice, oldest first.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.notices.drain()
    }

    /// Open a new empty document in `language` and bind it.
    ///
    /// # Errors
    /// Returns [`WorkspaceError::UnknownLanguage`] for ids outside the
    /// catalog.
    pub fn open_document(&mut self, language: &str) -> Result<(), WorkspaceError> {
        self.workspace.new_document(language)?;
        self.bind_active();
        Ok(())
    }

    /// Make a document active and bind it.
    ///
    /// # Errors
    /// Returns [`WorkspaceError::UnknownDocument`] when no document has `id`.
    pub fn select_document(&mut self, id: &str) -> Result<(), WorkspaceError> {
        self.workspace.set_active(id)?;
        self.bind_active();
        Ok(())
    }

    /// Switch the active document to `language` (destructive: content resets
    /// to the language template) and reload the surface.
    ///
    /// # Errors
    /// Returns [`WorkspaceError::UnknownLanguage`] for ids outside the
    /// catalog.
    pub fn change_language(&mut self, language: &str) -> Result<(), WorkspaceError> {
        let active = self.workspace.active_id().to_string();
        self.workspace.change_language(&active, language)?;
        self.bind_active();
        Ok(())
    }

    /// Close a document; when it was active, the first remaining document is
    /// bound instead.
    ///
    /// # Errors
    /// Returns [`WorkspaceError::CannotCloseLastDocument`] (also surfaced as
    /// a destructive notice) or [`WorkspaceError::UnknownDocument`].
    pub fn close_document(&mut self, id: &str) -> Result<(), WorkspaceError> {
        let was_active = self.workspace.active_id() == id;
        match self.workspace.close_document(id) {
            Ok(()) => {
                if was_active {
                    self.bind_active();
                }
                Ok(())
            }
            Err(WorkspaceError::CannotCloseLastDocument) => {
                self.notices.push(Notice::destructive(
                    "Cannot close",
                    "You need at least one file open",
                ));
                Err(WorkspaceError::CannotCloseLastDocument)
            }
            Err(other) => Err(other),
        }
    }

    /// Apply a user edit to the surface and propagate the new content to the
    /// active document.
    ///
    /// # Returns
    /// `Ok(true)` when the surface changed, `Ok(false)` for no-op edits.
    ///
    /// # Errors
    /// Returns [`WorkspaceError::UnknownDocument`] when the bound document no
    /// longer exists (caller bug).
    pub fn apply_edit(&mut self, edit: &Edit) -> Result<bool, WorkspaceError> {
        if !self.session.apply(edit) {
            return Ok(false);
        }
        let Some((id, text)) = self.session.pull_from_surface() else {
            return Ok(false);
        };
        self.workspace.update_content(&id, &text)?;
        Ok(true)
    }

    /// Run the active document's current content.
    ///
    /// A run issued while the engine is busy is rejected without touching the
    /// in-flight run. The engine reads an immutable snapshot taken here, so
    /// edits made afterwards cannot affect this run.
    pub fn run(&mut self) -> RunStatus {
        if self.engine.is_busy() {
            warn!("run rejected: engine busy");
            return RunStatus::Rejected;
        }

        let (descriptor, source) = {
            let document = self.workspace.get_active();
            match languages::describe(&document.language) {
                Ok(descriptor) => (descriptor, document.content.clone()),
                Err(err) => {
                    warn!("run rejected: {}", err);
                    return RunStatus::Rejected;
                }
            }
        };

        self.console.append([
            String::new(),
            format!("> Running {} code...", descriptor.id),
        ]);

        match self.engine.run(descriptor, &source) {
            Ok(result) => {
                self.console.append(result.lines.iter().cloned());
                RunStatus::Completed(result)
            }
            Err(EngineError::Busy) => RunStatus::Rejected,
        }
    }

    /// Persist a snapshot of the active document through `sink`.
    ///
    /// # Errors
    /// Propagates the sink's [`StoreError`]; a failure is also surfaced as a
    /// destructive notice.
    pub fn save_active(&mut self, sink: &dyn DocumentSink) -> Result<(), StoreError> {
        let document = self.workspace.get_active();
        match sink.save(document) {
            Ok(()) => {
                self.notices
                    .push(Notice::info("Saved!", "Your code has been saved locally"));
                Ok(())
            }
            Err(err) => {
                warn!("save failed: {}", err);
                self.notices
                    .push(Notice::destructive("Save failed", err.to_string()));
                Err(err)
            }
        }
    }

    /// Snapshot the console for the clipboard.
    pub fn copy_output(&mut self) -> String {
        let text = self.console.snapshot_text();
        self.notices
            .push(Notice::info("Copied!", "Output copied to clipboard"));
        text
    }

    pub fn clear_console(&mut self) {
        self.console.clear();
    }

    pub fn toggle_console(&mut self) {
        self.console.toggle_expanded();
    }

    /// Rebind the session to the active document (push direction only).
    fn bind_active(&mut self) {
        let document = self.workspace.get_active();
        match languages::describe(&document.language) {
            Ok(descriptor) => self.session.bind(document, descriptor),
            // Documents only ever hold catalog ids; leave the surface alone
            // rather than guessing a profile.
            Err(err) => warn!("cannot bind active document: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::CLEARED_MARKER;
    use codebench_core::Severity;

    fn test_config() -> Config {
        Config {
            db_path: String::new(),
            run_timeout_ms: Some(2_000),
            max_console_lines: 5_000,
        }
    }

    #[test]
    fn construction_binds_the_seed_document() {
        let playground = Playground::new(&test_config());
        let active = playground.workspace().get_active();
        assert_eq!(playground.session().bound_id(), Some(active.id.as_str()));
        assert_eq!(playground.session().surface().snapshot(), active.content);
    }

    #[test]
    fn switching_documents_rebinds_without_echoing_edits() {
        let mut playground = Playground::new(&test_config());
        let first = playground.workspace().active_id().to_string();
        playground.open_document("python").expect("open");
        let second = playground.workspace().active_id().to_string();
        assert_ne!(first, second);
        assert!(playground.session().surface().is_empty());

        playground.select_document(&first).expect("select");
        assert_eq!(playground.session().bound_id(), Some(first.as_str()));
        // Binding replaced the surface; the first document's stored content
        // was never rewritten by the switch.
        assert_eq!(
            playground.session().surface().snapshot(),
            playground.workspace().get_active().content
        );
    }

    #[test]
    fn change_language_reloads_the_surface_with_the_template() {
        let mut playground = Playground::new(&test_config());
        playground.change_language("typescript").expect("change");

        let active = playground.workspace().get_active();
        assert_eq!(active.name, "main.ts");
        assert_eq!(playground.session().surface().snapshot(), active.content);
        assert!(active.content.contains("interface User"));
    }

    #[test]
    fn edits_propagate_to_the_active_document_once() {
        let mut playground = Playground::new(&test_config());
        let length = playground.session().surface().len_chars();
        playground
            .apply_edit(&Edit::Replace {
                range: 0..length,
                text: "console.log(7);".to_string(),
            })
            .expect("edit");

        assert_eq!(
            playground.workspace().get_active().content,
            "console.log(7);"
        );
        // Propagation never rebinds: a reload would have rewound the
        // surface revision to zero.
        assert!(playground.session().surface().revision() > 0);

        // A no-op edit reports false and changes nothing.
        let changed = playground
            .apply_edit(&Edit::Insert {
                at: 0,
                text: String::new(),
            })
            .expect("edit");
        assert!(!changed);
    }

    #[test]
    fn closing_the_last_document_pushes_a_destructive_notice() {
        let mut playground = Playground::new(&test_config());
        let id = playground.workspace().active_id().to_string();

        let err = playground.close_document(&id).unwrap_err();
        assert_eq!(err, WorkspaceError::CannotCloseLastDocument);

        let notices = playground.drain_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].title, "Cannot close");
        assert_eq!(notices[0].severity, Severity::Destructive);
    }

    #[test]
    fn copy_output_snapshots_and_notifies() {
        let mut playground = Playground::new(&test_config());
        playground.clear_console();
        let text = playground.copy_output();
        assert_eq!(text, CLEARED_MARKER);
        let notices = playground.drain_notices();
        assert_eq!(notices[0].title, "Copied!");
    }
}
