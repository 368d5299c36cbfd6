//! Route lookup.
//!
//! # Responsibilities
//! - Store the route table in declaration order
//! - Look up the route for a normalized path
//! - Look up routes by name and build links for them
//!
//! # Design Decisions
//! - Immutable after construction (shareable without locks)
//! - O(n) scan, first match wins (uniqueness makes it the only match)
//! - Explicit NotFound rather than silent default

use serde::Serialize;
use thiserror::Error;

use crate::history::location::Base;
use crate::routing::matcher::{ExactPathMatcher, Matcher};
use crate::views::View;

/// Errors raised while building or querying the route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    /// No route is registered for the path.
    #[error("no route matches path {path}")]
    NotFound { path: String },

    /// No route carries the name.
    #[error("no route named {name}")]
    UnknownName { name: String },

    /// Two routes share a path.
    #[error("duplicate route path {path}")]
    DuplicatePath { path: String },

    /// Two routes share a name.
    #[error("duplicate route name {name}")]
    DuplicateName { name: String },

    /// Route paths must be absolute.
    #[error("route path {path} must start with '/'")]
    InvalidPath { path: String },
}

/// A named association between a literal path and a view.
#[derive(Debug, Clone, Serialize)]
pub struct Route {
    path: String,
    name: String,
    view: View,
    #[serde(skip)]
    matcher: ExactPathMatcher,
}

impl Route {
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: View) -> Self {
        let path = path.into();
        Self {
            matcher: ExactPathMatcher::new(path.clone()),
            path,
            name: name.into(),
            view,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Returns true if the normalized path selects this route.
    pub fn matches(&self, path: &str) -> bool {
        self.matcher.matches(path)
    }
}

/// Immutable, ordered route table.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build a table, rejecting relative paths and duplicate paths or names.
    pub fn new(routes: Vec<Route>) -> Result<Self, RoutingError> {
        for (i, route) in routes.iter().enumerate() {
            if !route.path.starts_with('/') {
                return Err(RoutingError::InvalidPath {
                    path: route.path.clone(),
                });
            }

            let earlier = &routes[..i];
            if earlier.iter().any(|r| r.path == route.path) {
                return Err(RoutingError::DuplicatePath {
                    path: route.path.clone(),
                });
            }
            if earlier.iter().any(|r| r.name == route.name) {
                return Err(RoutingError::DuplicateName {
                    name: route.name.clone(),
                });
            }
        }

        tracing::debug!(routes = routes.len(), "Route table built");
        Ok(Self { routes })
    }

    /// The hiking app's table: the trail map at `/`, group hikes at `/group-hikes`.
    pub fn hiking_app() -> Self {
        Self {
            routes: vec![
                Route::new("/", View::Map.name(), View::Map),
                Route::new("/group-hikes", View::GroupHikes.name(), View::GroupHikes),
            ],
        }
    }

    /// Find the route registered for a normalized path.
    pub fn resolve(&self, path: &str) -> Result<&Route, RoutingError> {
        self.routes
            .iter()
            .find(|r| r.matches(path))
            .ok_or_else(|| RoutingError::NotFound {
                path: path.to_string(),
            })
    }

    /// Find a route by its name.
    pub fn by_name(&self, name: &str) -> Result<&Route, RoutingError> {
        self.routes
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| RoutingError::UnknownName {
                name: name.to_string(),
            })
    }

    /// Full link for a named route, including the history base.
    pub fn href(&self, name: &str, base: &Base) -> Result<String, RoutingError> {
        self.by_name(name).map(|r| base.join(&r.path))
    }

    /// Routes in declaration order.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::hiking_app()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_root_is_map() {
        let table = RouteTable::hiking_app();
        let route = table.resolve("/").unwrap();
        assert_eq!(route.view(), View::Map);
        assert_eq!(route.name(), "map");
    }

    #[test]
    fn test_resolve_group_hikes() {
        let table = RouteTable::hiking_app();
        let route = table.resolve("/group-hikes").unwrap();
        assert_eq!(route.view(), View::GroupHikes);
        assert_eq!(route.name(), "group-hikes");
    }

    #[test]
    fn test_resolve_unknown_is_not_found() {
        let table = RouteTable::hiking_app();
        for path in ["/unknown", "/group-hikes/", "", "/map"] {
            assert_eq!(
                table.resolve(path).unwrap_err(),
                RoutingError::NotFound { path: path.to_string() }
            );
        }
    }

    #[test]
    fn test_resolve_is_repeatable() {
        let table = RouteTable::hiking_app();
        let first = table.resolve("/group-hikes").unwrap().view();
        let second = table.resolve("/group-hikes").unwrap().view();
        assert_eq!(first, second);
        assert!(table.resolve("/nope").is_err());
        assert_eq!(table.resolve("/").unwrap().view(), View::Map);
    }

    #[test]
    fn test_hiking_app_passes_validation() {
        let routes = RouteTable::hiking_app().routes().cloned().collect();
        let table = RouteTable::new(routes).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_names_are_unique() {
        let table = RouteTable::hiking_app();
        let names: Vec<_> = table.routes().map(|r| r.name()).collect();
        let mut deduped = names.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(names.len(), deduped.len());
    }

    #[test]
    fn test_rejects_duplicates() {
        let err = RouteTable::new(vec![
            Route::new("/", "map", View::Map),
            Route::new("/", "other", View::GroupHikes),
        ])
        .unwrap_err();
        assert_eq!(err, RoutingError::DuplicatePath { path: "/".into() });

        let err = RouteTable::new(vec![
            Route::new("/", "map", View::Map),
            Route::new("/hikes", "map", View::GroupHikes),
        ])
        .unwrap_err();
        assert_eq!(err, RoutingError::DuplicateName { name: "map".into() });
    }

    #[test]
    fn test_rejects_relative_path() {
        let err = RouteTable::new(vec![Route::new("group-hikes", "g", View::GroupHikes)])
            .unwrap_err();
        assert!(matches!(err, RoutingError::InvalidPath { .. }));
    }

    #[test]
    fn test_by_name_and_href() {
        let table = RouteTable::hiking_app();
        assert_eq!(table.by_name("group-hikes").unwrap().path(), "/group-hikes");
        assert!(matches!(
            table.by_name("missing"),
            Err(RoutingError::UnknownName { .. })
        ));

        let root = Base::new("/");
        assert_eq!(table.href("map", &root).unwrap(), "/");
        assert_eq!(table.href("group-hikes", &root).unwrap(), "/group-hikes");

        let nested = Base::new("/hikes/");
        assert_eq!(table.href("map", &nested).unwrap(), "/hikes/");
        assert_eq!(table.href("group-hikes", &nested).unwrap(), "/hikes/group-hikes");
    }
}
