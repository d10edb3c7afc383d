//! Core domain library for Codebench (languages, workspace, storage).

/// Configuration loading and defaults.
pub mod config;
/// Application error types (workspace/storage).
pub mod error;
/// Language catalog and capability lookups.
pub mod languages;
/// Data models for open documents.
pub mod models;
/// Document naming helpers.
pub mod naming;
/// User-facing notification payloads.
pub mod notice;
/// Saved-document storage layer.
pub mod store;
/// Open-document set and active-document state.
pub mod workspace;

pub use config::Config;
pub use error::{StoreError, WorkspaceError};
pub use languages::LanguageDescriptor;
pub use models::document::Document;
pub use notice::{Notice, NoticeQueue, Severity};
pub use store::{DocumentSink, DocumentStore, SavedDocument};
pub use workspace::Workspace;
