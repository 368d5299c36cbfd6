//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks against the route table)
//!     → RouterConfig (validated, immutable)
//!     → used to build the history base and the navigator
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup
//! - All fields have defaults so an empty file is valid
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{LogFormat, NotFoundPolicy, ObservabilityConfig, RouterConfig};
pub use validation::{validate_config, ValidationError};
