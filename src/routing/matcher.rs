//! Route matching logic.
//!
//! # Responsibilities
//! - Compare a normalized path against a route's literal path
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - Trailing slashes are significant (`/group-hikes/` is a different path)
//! - No regex and no pattern syntax

/// Trait for matching normalized paths against a route condition.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the path matches this condition.
    fn matches(&self, path: &str) -> bool;
}

/// Matches one literal path exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactPathMatcher {
    path: String,
}

impl ExactPathMatcher {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Matcher for ExactPathMatcher {
    fn matches(&self, path: &str) -> bool {
        self.path == path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_matcher() {
        let matcher = ExactPathMatcher::new("/group-hikes");

        assert!(matcher.matches("/group-hikes"));
        assert!(!matcher.matches("/group-hikes/"));
        assert!(!matcher.matches("/Group-Hikes")); // Case sensitive
        assert!(!matcher.matches("/group-hikes/2024"));
        assert!(!matcher.matches("/"));
    }

    #[test]
    fn test_root_matcher_is_not_a_prefix() {
        let matcher = ExactPathMatcher::new("/");

        assert!(matcher.matches("/"));
        assert!(!matcher.matches("/group-hikes"));
        assert!(!matcher.matches(""));
    }
}
