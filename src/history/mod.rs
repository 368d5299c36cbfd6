//! Navigation history subsystem.
//!
//! # Data Flow
//! ```text
//! Raw URL or path from a navigation event
//!     → location.rs (strip query/fragment, strip base prefix)
//!     → memory.rs (push / replace / go on the entry stack)
//!     → current Location handed to the router
//! ```
//!
//! # Design Decisions
//! - History is the only place that knows about the base prefix
//! - Entries are stored normalized; the router only ever sees bare paths
//! - Out-of-range moves are ignored, as in browser history

pub mod location;
pub mod memory;

pub use location::{Base, Location, LocationError};
pub use memory::MemoryHistory;
