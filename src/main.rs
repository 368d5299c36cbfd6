//! hike-router
//!
//! Inspect the hiking app's route table, resolve URLs against it and replay
//! navigation sessions.
//!
//! ```text
//! hike-router routes
//! hike-router resolve https://example.org/group-hikes?day=sat
//! hike-router --base /hikes/ navigate push:/hikes/group-hikes back forward
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde_json::json;

use hike_router::config::{load_config, validate_config, ConfigError, RouterConfig};
use hike_router::history::{Base, Location};
use hike_router::navigation::{NavigationEvent, Navigator};
use hike_router::observability::init_logging;
use hike_router::routing::RouteTable;

#[derive(Parser)]
#[command(name = "hike-router")]
#[command(about = "Route table for the hiking map app", long_about = None)]
struct Cli {
    /// TOML config file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the deployment base path (e.g. /hikes/).
    #[arg(short, long, global = true)]
    base: Option<String>,

    /// Print machine-readable JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the registered routes
    Routes,
    /// Resolve a URL or path to its view
    Resolve {
        url: String,
    },
    /// Replay navigation events (push:<url>, replace:<url>, back, forward, go:<n>)
    Navigate {
        #[arg(required = true)]
        events: Vec<NavigationEvent>,
    },
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let table = Arc::new(RouteTable::hiking_app());

    let mut config = match &cli.config {
        Some(path) => load_config(path, &table)?,
        None => RouterConfig::default(),
    };
    if let Some(base) = &cli.base {
        config.base_url = base.clone();
        validate_config(&config, &table).map_err(ConfigError::Validation)?;
    }

    init_logging(&config.observability);

    tracing::info!(
        config_file = ?cli.config,
        base_url = %config.base_url,
        not_found = ?config.not_found,
        routes = table.len(),
        "Configuration loaded"
    );

    let code = match cli.command {
        Commands::Routes => print_routes(&table, &config, cli.json)?,
        Commands::Resolve { url } => resolve(&table, &config, &url, cli.json)?,
        Commands::Navigate { events } => navigate(table, &config, events, cli.json)?,
    };
    Ok(code)
}

fn print_routes(
    table: &RouteTable,
    config: &RouterConfig,
    as_json: bool,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let base = Base::new(&config.base_url);

    if as_json {
        let routes = table
            .routes()
            .map(|r| {
                let href = table.href(r.name(), &base)?;
                Ok(json!({
                    "name": r.name(),
                    "path": r.path(),
                    "view": r.view(),
                    "component": r.view().component(),
                    "href": href,
                }))
            })
            .collect::<Result<Vec<_>, hike_router::RoutingError>>()?;
        println!("{}", serde_json::to_string_pretty(&routes)?);
    } else {
        for r in table.routes() {
            println!(
                "{:<12} {:<14} {:<18} {}",
                r.name(),
                r.path(),
                r.view().component(),
                table.href(r.name(), &base)?
            );
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn resolve(
    table: &RouteTable,
    config: &RouterConfig,
    url: &str,
    as_json: bool,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let location = Location::parse(url, &Base::new(&config.base_url))?;

    match table.resolve(&location.path) {
        Ok(route) => {
            if as_json {
                let out = json!({
                    "location": location,
                    "route": route,
                    "component": route.view().component(),
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{} -> {} ({})", location.path, route.name(), route.view().component());
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            if as_json {
                let out = json!({ "location": location, "error": e.to_string() });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                eprintln!("{}", e);
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

fn navigate(
    table: Arc<RouteTable>,
    config: &RouterConfig,
    events: Vec<NavigationEvent>,
    as_json: bool,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut navigator = Navigator::new(table, config);
    let mut failed = false;
    let mut outcomes = Vec::new();

    for event in events {
        let label = event.to_string();
        match navigator.navigate(event) {
            Ok(nav) => {
                if as_json {
                    outcomes.push(serde_json::to_value(&nav)?);
                } else {
                    let view = nav
                        .view
                        .map(|v| format!("{} ({})", v, v.component()))
                        .unwrap_or_else(|| "<no view>".to_string());
                    let note = if nav.redirected { " [redirected]" } else { "" };
                    println!("{:<24} {} -> {}{}", label, nav.href, view, note);
                }
            }
            Err(e) => {
                failed = true;
                if as_json {
                    outcomes.push(json!({ "event": label, "error": e.to_string() }));
                } else {
                    println!("{:<24} error: {}", label, e);
                }
            }
        }
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    }
    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}
