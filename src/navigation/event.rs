//! Navigation events.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Something that asks the router to show a different location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "target", rename_all = "lowercase")]
pub enum NavigationEvent {
    /// Link click: adds a history entry.
    Push(String),
    /// Programmatic redirect: overwrites the current entry.
    Replace(String),
    Back,
    Forward,
    /// Move through history by a relative offset.
    Go(isize),
}

impl NavigationEvent {
    /// Offset through history for back/forward/go, `None` for push/replace.
    pub fn history_delta(&self) -> Option<isize> {
        match self {
            NavigationEvent::Back => Some(-1),
            NavigationEvent::Forward => Some(1),
            NavigationEvent::Go(delta) => Some(*delta),
            NavigationEvent::Push(_) | NavigationEvent::Replace(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid navigation event {input:?}: expected push:<url>, replace:<url>, back, forward or go:<n>")]
pub struct ParseEventError {
    pub input: String,
}

/// Parses the compact CLI form: `push:/x`, `replace:/x`, `back`, `forward`, `go:-2`.
impl FromStr for NavigationEvent {
    type Err = ParseEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseEventError { input: s.to_string() };
        match s.split_once(':') {
            Some(("push", target)) => Ok(NavigationEvent::Push(target.to_string())),
            Some(("replace", target)) => Ok(NavigationEvent::Replace(target.to_string())),
            Some(("go", delta)) => delta.trim().parse().map(NavigationEvent::Go).map_err(|_| err()),
            Some(_) => Err(err()),
            None => match s {
                "back" => Ok(NavigationEvent::Back),
                "forward" => Ok(NavigationEvent::Forward),
                _ => Err(err()),
            },
        }
    }
}

impl fmt::Display for NavigationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationEvent::Push(t) => write!(f, "push:{}", t),
            NavigationEvent::Replace(t) => write!(f, "replace:{}", t),
            NavigationEvent::Back => f.write_str("back"),
            NavigationEvent::Forward => f.write_str("forward"),
            NavigationEvent::Go(d) => write!(f, "go:{}", d),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_events() {
        assert_eq!("push:/group-hikes".parse::<NavigationEvent>(), Ok(NavigationEvent::Push("/group-hikes".into())));
        // Only the first colon separates the kind
        assert_eq!(
            "push:https://example.org/".parse::<NavigationEvent>(),
            Ok(NavigationEvent::Push("https://example.org/".into()))
        );
        assert_eq!("replace:/".parse::<NavigationEvent>(), Ok(NavigationEvent::Replace("/".into())));
        assert_eq!("back".parse::<NavigationEvent>(), Ok(NavigationEvent::Back));
        assert_eq!("forward".parse::<NavigationEvent>(), Ok(NavigationEvent::Forward));
        assert_eq!("go:-2".parse::<NavigationEvent>(), Ok(NavigationEvent::Go(-2)));
    }

    #[test]
    fn test_parse_invalid_events() {
        assert!("jump:/".parse::<NavigationEvent>().is_err());
        assert!("go:far".parse::<NavigationEvent>().is_err());
        assert!("reload".parse::<NavigationEvent>().is_err());
    }
}
