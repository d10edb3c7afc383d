//! Deterministic file-name helpers for workspace documents.

/// Base name used when a document's language changes in place.
pub const DEFAULT_BASE_NAME: &str = "main";

/// Name for a newly opened document: `file{ordinal}.{extension}`.
pub fn numbered_file_name(ordinal: usize, extension: &str) -> String {
    format!("file{}.{}", ordinal, extension)
}

/// Name for a document rewritten to a new language: `main.{extension}`.
pub fn main_file_name(extension: &str) -> String {
    format!("{}.{}", DEFAULT_BASE_NAME, extension)
}
