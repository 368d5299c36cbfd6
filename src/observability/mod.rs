//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing / history / navigation
//!     → tracing events (structured key-value fields)
//!     → logging.rs subscriber (stderr, pretty or JSON)
//! ```
//!
//! # Design Decisions
//! - Library code only emits events; the binary installs the subscriber
//! - Logs go to stderr so stdout stays clean for command output

pub mod logging;

pub use logging::init_logging;
