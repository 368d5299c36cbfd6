//! Page views selected by the router.
//!
//! # Design Decisions
//! - Views are opaque to the router: it only decides which one is active
//! - Closed set of views, so a plain enum instead of trait objects
//! - Rendering belongs to the host UI layer, not to this crate

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A top-level page of the hiking app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    /// Interactive trail map (`MapComponent`).
    Map,
    /// List of organised group hikes (`GroupHikesSection`).
    GroupHikes,
}

impl View {
    /// All views, in the order the app declares them.
    pub const ALL: [View; 2] = [View::Map, View::GroupHikes];

    /// Symbolic identifier, also used as the route name.
    pub fn name(&self) -> &'static str {
        match self {
            View::Map => "map",
            View::GroupHikes => "group-hikes",
        }
    }

    /// Name of the UI component that renders this view.
    pub fn component(&self) -> &'static str {
        match self {
            View::Map => "MapComponent",
            View::GroupHikes => "GroupHikesSection",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no known view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown view: {0}")]
pub struct UnknownView(pub String);

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}
