//! Route table and navigation for the hiking web app.
//!
//! Two pages: the trail map at `/` and the group-hikes list at
//! `/group-hikes`. The table is built once and only answers which view is
//! active for a path; history and the not-found policy live around it.

pub mod config;
pub mod history;
pub mod navigation;
pub mod observability;
pub mod routing;
pub mod views;

pub use config::RouterConfig;
pub use navigation::{NavigationEvent, Navigator};
pub use routing::{Route, RouteTable, RoutingError};
pub use views::View;
