//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the fallback route exists in the route table
//! - Check the base prefix is a plain absolute path
//! - Check the log level is one tracing understands
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Pure function: (RouterConfig, RouteTable) → Result<(), Vec<ValidationError>>

use thiserror::Error;
use tracing::level_filters::LevelFilter;

use crate::config::schema::{NotFoundPolicy, RouterConfig};
use crate::routing::RouteTable;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("base_url {0:?} must start with '/'")]
    RelativeBase(String),

    #[error("base_url {0:?} must not contain a query or fragment")]
    BaseWithQuery(String),

    #[error("fallback_route {0:?} is not a registered route")]
    UnknownFallback(String),

    #[error("log_level {0:?} is not one of trace, debug, info, warn, error, off")]
    InvalidLogLevel(String),
}

pub fn validate_config(config: &RouterConfig, table: &RouteTable) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !config.base_url.starts_with('/') {
        errors.push(ValidationError::RelativeBase(config.base_url.clone()));
    }
    if config.base_url.contains(['?', '#']) {
        errors.push(ValidationError::BaseWithQuery(config.base_url.clone()));
    }

    // Only matters when we actually redirect
    if config.not_found == NotFoundPolicy::Redirect && table.by_name(&config.fallback_route).is_err() {
        errors.push(ValidationError::UnknownFallback(config.fallback_route.clone()));
    }

    if config.observability.log_level.parse::<LevelFilter>().is_err() {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RouterConfig::default();
        assert!(validate_config(&config, &RouteTable::hiking_app()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = RouterConfig::default();
        config.base_url = "hikes?x=1".into();
        config.not_found = NotFoundPolicy::Redirect;
        config.fallback_route = "home".into();
        config.observability.log_level = "loud".into();

        let errors = validate_config(&config, &RouteTable::hiking_app()).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::UnknownFallback("home".into())));
    }

    #[test]
    fn test_fallback_ignored_without_redirect() {
        let mut config = RouterConfig::default();
        config.fallback_route = "home".into();
        assert!(validate_config(&config, &RouteTable::hiking_app()).is_ok());
    }
}
