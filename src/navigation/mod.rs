//! Navigation dispatch.
//!
//! # Data Flow
//! ```text
//! NavigationEvent (link click, redirect, back/forward)
//!     → history (normalize target, move cursor)
//!     → routing (resolve current path)
//!     → NotFoundPolicy (empty / redirect / reject)
//!     → Navigation { from, to, view }
//! ```
//!
//! # Design Decisions
//! - Synchronous, single owner (`&mut self`); the table itself is shared
//! - A rejected navigation leaves history exactly as it was

pub mod event;
pub mod navigator;

pub use event::{NavigationEvent, ParseEventError};
pub use navigator::{Navigation, NavigationError, Navigator};
