//! User-facing notification payloads and the bounded notice queue.

use std::collections::VecDeque;

/// How a notice should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Destructive,
}

/// Short title+description pair handed to the host's toast surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }
}

/// Default cap on queued notices.
pub const NOTICE_LIMIT: usize = 8;

/// Bounded queue of pending notices.
///
/// A notice identical to the newest queued one is collapsed into it; when the
/// cap is exceeded the oldest notices are dropped.
#[derive(Debug, Clone)]
pub struct NoticeQueue {
    queue: VecDeque<Notice>,
    limit: usize,
}

impl Default for NoticeQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::with_limit(NOTICE_LIMIT)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            limit: limit.max(1),
        }
    }

    pub fn push(&mut self, notice: Notice) {
        if self.queue.back() == Some(&notice) {
            return;
        }
        self.queue.push_back(notice);
        while self.queue.len() > self.limit {
            self.queue.pop_front();
        }
    }

    /// Take every pending notice, oldest first.
    pub fn drain(&mut self) -> Vec<Notice> {
        self.queue.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.queue.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consecutive_duplicates_collapse() {
        let mut queue = NoticeQueue::new();
        queue.push(Notice::info("Saved!", "Snapshot written"));
        queue.push(Notice::info("Saved!", "Snapshot written"));
        assert_eq!(queue.len(), 1);

        queue.push(Notice::destructive("Cannot close", "Last file"));
        queue.push(Notice::info("Saved!", "Snapshot written"));
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn queue_length_is_capped() {
        let mut queue = NoticeQueue::with_limit(3);
        for index in 0..6 {
            queue.push(Notice::info(format!("Notice {}", index), ""));
        }
        assert_eq!(queue.len(), 3);
        let drained = queue.drain();
        assert_eq!(drained[0].title, "Notice 3");
        assert!(queue.is_empty());
    }
}
