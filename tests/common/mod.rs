//! Shared utilities for integration tests.

use std::path::PathBuf;
use std::sync::Arc;

use hike_router::config::{parse_config, RouterConfig};
use hike_router::navigation::{NavigationEvent, Navigator};
use hike_router::routing::RouteTable;

/// Build a navigator over the app's table from TOML config text.
#[allow(dead_code)]
pub fn navigator_from_toml(content: &str) -> Navigator {
    let table = Arc::new(RouteTable::hiking_app());
    let config = parse_config(content, &table).unwrap();
    Navigator::new(table, &config)
}

/// Parse a list of compact event strings (`push:/x`, `back`, ...).
#[allow(dead_code)]
pub fn events(list: &[&str]) -> Vec<NavigationEvent> {
    list.iter().map(|e| e.parse().unwrap()).collect()
}

/// Write a config file into a fresh per-test directory.
#[allow(dead_code)]
pub fn write_config(test_name: &str, content: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("hike-router-{}-{}", test_name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("hike-router.toml");
    std::fs::write(&path, content).unwrap();
    path
}

#[allow(dead_code)]
pub fn default_config() -> RouterConfig {
    RouterConfig::default()
}
