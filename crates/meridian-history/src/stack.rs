//! The history stack
//!
//! Index 0 is the most recent entry. `len` always equals the live entry
//! count; popping an empty stack returns `None`, never panics.

use std::collections::VecDeque;

use crate::entry::HistoryEntry;

#[derive(Debug, Clone, Default)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Insert at the front; becomes the new most-recent entry
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
    }

    /// Remove and return the most-recent entry
    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop_front()
    }

    /// Truncate to entries from `index` onward, discarding everything more
    /// recent. The entry previously at `index` becomes the new front and is
    /// returned. Out-of-range indices leave the stack untouched.
    pub fn slice(&mut self, index: usize) -> Option<&HistoryEntry> {
        if index >= self.entries.len() {
            return None;
        }
        self.entries.drain(..index);
        self.entries.front()
    }

    /// Position of the most recent entry whose view matches
    pub fn index_of(&self, view: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.view == view)
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Iterate entries in stack order, most recent first
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(view: &str) -> HistoryEntry {
        HistoryEntry::new(format!("/{}", view), view)
    }

    #[test]
    fn test_push_pop_round_trip() {
        let mut history = History::new();
        history.push(entry("a"));
        let before = history.len();

        let pushed = entry("b");
        history.push(pushed.clone());
        let popped = history.pop().unwrap();

        assert_eq!(popped, pushed);
        assert_eq!(history.len(), before);
    }

    #[test]
    fn test_pop_empty_returns_none() {
        let mut history = History::new();
        assert!(history.pop().is_none());
        assert_eq!(history.len(), 0);
    }

    #[test]
    fn test_index_of_finds_most_recent() {
        let mut history = History::new();
        history.push(entry("a"));
        history.push(entry("b"));
        history.push(entry("a"));

        // Front is the most recent "a"
        assert_eq!(history.index_of("a"), Some(0));
        assert_eq!(history.index_of("b"), Some(1));
        assert_eq!(history.index_of("c"), None);
    }

    #[test]
    fn test_slice_discards_forward_entries() {
        let mut history = History::new();
        for view in ["e1", "e2", "e3", "e4"] {
            history.push(entry(view));
        }
        // Stack front-to-back: e4 e3 e2 e1

        let front = history.slice(2).unwrap();
        assert_eq!(front.view, "e2");
        assert_eq!(history.len(), 2);

        // Views that lived only in the discarded region are gone
        assert_eq!(history.index_of("e4"), None);
        assert_eq!(history.index_of("e3"), None);
        assert_eq!(history.index_of("e2"), Some(0));
        assert_eq!(history.index_of("e1"), Some(1));
    }

    #[test]
    fn test_slice_out_of_range_is_noop() {
        let mut history = History::new();
        history.push(entry("a"));

        assert!(history.slice(5).is_none());
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_iter_does_not_mutate() {
        let mut history = History::new();
        history.push(entry("a"));
        history.push(entry("b"));

        let views: Vec<&str> = history.iter().map(|e| e.view.as_str()).collect();
        assert_eq!(views, ["b", "a"]);
        assert_eq!(history.len(), 2);
    }
}
