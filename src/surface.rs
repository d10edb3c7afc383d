//! Rope-backed text storage for the editor surface.

use ropey::Rope;
use std::ops::Range;

/// Rope-backed content buffer behind the editor session.
///
/// Positions are global char indices; out-of-range indices are clamped the
/// way an editor caret would be.
#[derive(Clone, Default)]
pub struct SurfaceBuffer {
    rope: Rope,
    revision: u64,
    char_len: usize,
}

impl SurfaceBuffer {
    /// Create a new buffer from UTF-8 text.
    pub fn new(text: &str) -> Self {
        let rope = Rope::from_str(text);
        let char_len = rope.len_chars();
        Self {
            rope,
            revision: 0,
            char_len,
        }
    }

    /// Returns the current revision of the buffer.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the content length in characters.
    pub fn len_chars(&self) -> usize {
        self.char_len
    }

    pub fn is_empty(&self) -> bool {
        self.char_len == 0
    }

    /// Returns a UTF-8 snapshot of the whole buffer.
    pub fn snapshot(&self) -> String {
        self.rope.to_string()
    }

    /// Replace the full buffer text with a fresh snapshot.
    pub fn reset(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.char_len = self.rope.len_chars();
        self.revision = 0;
    }

    /// Insert text at the given char position.
    ///
    /// # Returns
    /// `true` when the buffer changed.
    pub fn insert_text(&mut self, char_index: usize, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        let at = char_index.min(self.char_len);
        let inserted = text.chars().count();
        self.rope.insert(at, text);
        self.char_len = self.char_len.saturating_add(inserted);
        self.revision = self.revision.wrapping_add(1);
        true
    }

    /// Delete a char range.
    ///
    /// # Returns
    /// `true` when the buffer changed.
    pub fn delete_char_range(&mut self, range: Range<usize>) -> bool {
        let start = range.start.min(self.char_len);
        let end = range.end.min(self.char_len);
        if start >= end {
            return false;
        }
        self.rope.remove(start..end);
        self.char_len = self.char_len.saturating_sub(end - start);
        self.revision = self.revision.wrapping_add(1);
        true
    }

    /// Replace a char range with new text.
    ///
    /// # Returns
    /// `true` when the buffer changed.
    pub fn replace_char_range(&mut self, range: Range<usize>, text: &str) -> bool {
        let start = range.start.min(self.char_len);
        let end = range.end.min(self.char_len);
        if start > end || (start == end && text.is_empty()) {
            return false;
        }
        let removed = end - start;
        let inserted = text.chars().count();
        if start < end {
            self.rope.remove(start..end);
        }
        if !text.is_empty() {
            self.rope.insert(start, text);
        }
        self.char_len = self.char_len + inserted - removed;
        self.revision = self.revision.wrapping_add(1);
        true
    }
}
