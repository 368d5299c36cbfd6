//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation event (normalized path)
//!     → router.rs (route lookup)
//!     → matcher.rs (exact path comparison)
//!     → Return: matched Route or NotFound
//!
//! Table construction (at startup):
//!     (path, name, view)[]
//!     → Check paths are absolute and unique, names unique
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Table built once, immutable at runtime
//! - Exact literal matching only: no wildcards, params or nesting
//! - Deterministic: same path always resolves to the same route
//! - Explicit NotFound rather than a silent default

pub mod matcher;
pub mod router;

pub use matcher::{ExactPathMatcher, Matcher};
pub use router::{Route, RouteTable, RoutingError};
