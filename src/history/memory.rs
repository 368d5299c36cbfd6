//! In-memory history stack.
//!
//! # Responsibilities
//! - Keep the list of visited locations and a cursor into it
//! - Push, replace and move back/forward like browser history
//!
//! # Design Decisions
//! - Always holds at least one entry (the starting location)
//! - Push discards forward entries
//! - Moves past either end are no-ops that report `None`

use crate::history::location::{Base, Location};

#[derive(Debug, Clone)]
pub struct MemoryHistory {
    base: Base,
    entries: Vec<Location>,
    position: usize,
}

impl MemoryHistory {
    /// Start a history at the app root.
    pub fn new(base: Base) -> Self {
        Self::starting_at(base, Location::root())
    }

    pub fn starting_at(base: Base, start: Location) -> Self {
        Self {
            base,
            entries: vec![start],
            position: 0,
        }
    }

    pub fn base(&self) -> &Base {
        &self.base
    }

    pub fn current(&self) -> &Location {
        &self.entries[self.position]
    }

    /// Index of the current entry.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, location: Location) {
        self.entries.truncate(self.position + 1);
        self.entries.push(location);
        self.position = self.entries.len() - 1;
    }

    pub fn replace(&mut self, location: Location) {
        self.entries[self.position] = location;
    }

    /// Move the cursor by `delta` entries.
    ///
    /// Returns the new current location, or `None` if the move would leave
    /// the stack (the cursor is then unchanged).
    pub fn go(&mut self, delta: isize) -> Option<&Location> {
        let target = self.position.checked_add_signed(delta)?;
        if target >= self.entries.len() {
            return None;
        }
        self.position = target;
        Some(self.current())
    }

    pub fn back(&mut self) -> Option<&Location> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Option<&Location> {
        self.go(1)
    }

    /// Link for the current entry, including the base.
    pub fn href(&self) -> String {
        self.base.join(&self.current().full_path())
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new(Base::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(path: &str) -> Location {
        Location::from_path(path)
    }

    #[test]
    fn test_starts_at_root() {
        let history = MemoryHistory::default();
        assert_eq!(history.current().path, "/");
        assert_eq!(history.len(), 1);
        assert_eq!(history.position(), 0);
    }

    #[test]
    fn test_push_back_forward() {
        let mut history = MemoryHistory::default();
        history.push(loc("/group-hikes"));
        history.push(loc("/"));

        assert_eq!(history.back().unwrap().path, "/group-hikes");
        assert_eq!(history.back().unwrap().path, "/");
        assert!(history.back().is_none());
        assert_eq!(history.position(), 0);

        assert_eq!(history.forward().unwrap().path, "/group-hikes");
        assert_eq!(history.forward().unwrap().path, "/");
        assert!(history.forward().is_none());
    }

    #[test]
    fn test_push_discards_forward_entries() {
        let mut history = MemoryHistory::default();
        history.push(loc("/group-hikes"));
        history.back();
        history.push(loc("/elsewhere"));

        assert_eq!(history.len(), 2);
        assert!(history.forward().is_none());
        assert_eq!(history.current().path, "/elsewhere");
    }

    #[test]
    fn test_replace_keeps_length() {
        let mut history = MemoryHistory::default();
        history.push(loc("/typo"));
        history.replace(loc("/"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.current().path, "/");
    }

    #[test]
    fn test_go_out_of_range() {
        let mut history = MemoryHistory::default();
        history.push(loc("/group-hikes"));
        assert!(history.go(-5).is_none());
        assert!(history.go(3).is_none());
        assert_eq!(history.current().path, "/group-hikes");
        assert_eq!(history.go(-1).unwrap().path, "/");
        assert_eq!(history.go(0).unwrap().path, "/");
    }

    #[test]
    fn test_href_includes_base() {
        let mut history = MemoryHistory::new(Base::new("/hikes/"));
        assert_eq!(history.href(), "/hikes/");
        history.push(loc("/group-hikes"));
        assert_eq!(history.href(), "/hikes/group-hikes");
    }
}
