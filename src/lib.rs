//! Interactive coding workspace: documents, editor session, run pipeline,
//! and the output console.

/// Application glue for workspace, session, engine, and console.
pub mod app;
/// Append-only output console state.
pub mod console;
/// Editor session binding one surface to the active document.
pub mod session;
/// Rope-backed editable text surface.
pub mod surface;
/// Language-to-syntax-profile resolution.
pub mod syntax;

pub use app::{Playground, RunStatus};
pub use codebench_core::{
    languages, Config, Document, Notice, NoticeQueue, Severity, Workspace, WorkspaceError,
};
pub use codebench_engine::{EngineConfig, ExecutionEngine, ExecutionResult, Outcome};
pub use console::{line_kind, LineKind, OutputConsole};
pub use session::{Edit, EditorSession};
pub use surface::SurfaceBuffer;
pub use syntax::SyntaxProfile;
