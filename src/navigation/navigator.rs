//! Navigator: applies navigation events to history and the route table.
//!
//! # Responsibilities
//! - Normalize event targets against the history base
//! - Push/replace/move history entries
//! - Resolve the resulting path and apply the not-found policy
//!
//! # Design Decisions
//! - Reject is checked before history is touched for push/replace
//! - Any failed navigation restores the previous history
//! - Redirect rewrites the current entry rather than adding one

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::config::{NotFoundPolicy, RouterConfig};
use crate::history::{Base, Location, LocationError, MemoryHistory};
use crate::navigation::event::NavigationEvent;
use crate::routing::{RouteTable, RoutingError};
use crate::views::View;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// Target has no route and the policy is `reject`.
    #[error("no route matches path {path}")]
    NotFound { path: String },

    /// Back/forward/go past the ends of history.
    #[error("cannot move {delta} entries through history")]
    OutOfRange { delta: isize },

    #[error(transparent)]
    Location(#[from] LocationError),

    #[error(transparent)]
    Routing(#[from] RoutingError),
}

/// Outcome of one navigation event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub event: NavigationEvent,
    pub from: Location,
    pub to: Location,
    /// Name of the matched route, if any.
    pub route: Option<String>,
    /// Active view after the navigation, `None` when nothing matched.
    pub view: Option<View>,
    /// True when the not-found policy sent us to the fallback route.
    pub redirected: bool,
    /// Address-bar link of the new location.
    pub href: String,
}

/// Single-owner navigation state over a shared route table.
#[derive(Debug, Clone)]
pub struct Navigator {
    table: Arc<RouteTable>,
    history: MemoryHistory,
    policy: NotFoundPolicy,
    fallback_route: String,
}

impl Navigator {
    pub fn new(table: Arc<RouteTable>, config: &RouterConfig) -> Self {
        Self {
            table,
            history: MemoryHistory::new(Base::new(&config.base_url)),
            policy: config.not_found,
            fallback_route: config.fallback_route.clone(),
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn history(&self) -> &MemoryHistory {
        &self.history
    }

    pub fn policy(&self) -> NotFoundPolicy {
        self.policy
    }

    /// View for the current history entry.
    pub fn current_view(&self) -> Option<View> {
        self.table
            .resolve(&self.history.current().path)
            .ok()
            .map(|r| r.view())
    }

    /// Apply one navigation event.
    ///
    /// On error history is restored to its state before the event.
    pub fn navigate(&mut self, event: NavigationEvent) -> Result<Navigation, NavigationError> {
        let snapshot = self.history.clone();
        let result = self.apply(event);
        if result.is_err() {
            self.history = snapshot;
        }
        result
    }

    fn apply(&mut self, event: NavigationEvent) -> Result<Navigation, NavigationError> {
        let from = self.history.current().clone();

        if let Some(delta) = event.history_delta() {
            if self.history.go(delta).is_none() {
                tracing::debug!(delta, "History move out of range");
                return Err(NavigationError::OutOfRange { delta });
            }
            if self.policy == NotFoundPolicy::Reject {
                let path = self.history.current().path.clone();
                self.ensure_routable(&path)?;
            }
        } else if let NavigationEvent::Push(target) | NavigationEvent::Replace(target) = &event {
            let location = Location::parse(target, self.history.base())?;
            if self.policy == NotFoundPolicy::Reject {
                self.ensure_routable(&location.path)?;
            }
            if matches!(event, NavigationEvent::Push(_)) {
                self.history.push(location);
            } else {
                self.history.replace(location);
            }
        }

        self.settle(event, from)
    }

    fn ensure_routable(&self, path: &str) -> Result<(), NavigationError> {
        self.table.resolve(path).map(|_| ()).map_err(|_| {
            tracing::warn!(path, "Navigation rejected: no matching route");
            NavigationError::NotFound {
                path: path.to_string(),
            }
        })
    }

    /// Resolve the current entry and build the outcome.
    fn settle(&mut self, event: NavigationEvent, from: Location) -> Result<Navigation, NavigationError> {
        let path = self.history.current().path.clone();
        let mut redirected = false;

        let route = match self.table.resolve(&path) {
            Ok(route) => Some(route),
            Err(_) => match self.policy {
                NotFoundPolicy::Redirect => {
                    let fallback = self.table.by_name(&self.fallback_route)?;
                    tracing::info!(
                        path = %path,
                        fallback = fallback.name(),
                        "No matching route, redirecting"
                    );
                    self.history.replace(Location::from_path(fallback.path()));
                    redirected = true;
                    Some(fallback)
                }
                NotFoundPolicy::Empty | NotFoundPolicy::Reject => {
                    tracing::warn!(path = %path, "No match found for location");
                    None
                }
            },
        };

        let navigation = Navigation {
            event,
            from,
            to: self.history.current().clone(),
            route: route.map(|r| r.name().to_string()),
            view: route.map(|r| r.view()),
            redirected,
            href: self.history.href(),
        };

        tracing::debug!(
            event = %navigation.event,
            from = %navigation.from,
            to = %navigation.to,
            view = ?navigation.view,
            "Navigation complete"
        );
        Ok(navigation)
    }
}
