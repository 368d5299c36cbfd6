//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the router.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Prefix the app is deployed under (e.g., "/" or "/hikes/").
    pub base_url: String,

    /// What happens when no route matches.
    pub not_found: NotFoundPolicy,

    /// Route name to land on when `not_found = "redirect"`.
    pub fallback_route: String,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            base_url: "/".to_string(),
            not_found: NotFoundPolicy::default(),
            fallback_route: "map".to_string(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Handling of navigations to unregistered paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotFoundPolicy {
    /// Accept the navigation and render no view.
    #[default]
    Empty,
    /// Replace the entry with the fallback route.
    Redirect,
    /// Refuse the navigation and stay where we are.
    Reject,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Output format for log lines.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}
