//! Panelkit host binary.
//!
//! Wires the UI plugin registry into an axum server and carries the
//! `plug` scaffolding command. Plugins are linked at build time: each
//! generated plugin module is declared here and registered during
//! startup, before the server begins handling traffic.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Json, Router};
use clap::{Parser, Subcommand};
use panelkit_uiplugin::{ui_plugin_router, UiPlugin, UiPluginRegistry};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Debug, Parser)]
#[command(name = "panelkit", version, about = "panelkit admin panel backend")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the admin backend server
    Serve(ServeArgs),
    /// Creates a new UI plugin
    Plug(panelkit_plug::PlugArgs),
}

#[derive(Debug, clap::Args)]
struct ServeArgs {
    /// Listen address; overrides PANELKIT_ADDR.
    #[arg(long)]
    addr: Option<SocketAddr>,
}

#[derive(Serialize)]
struct ApiStatus {
    status: &'static str,
    version: &'static str,
}

/// UI plugins compiled into this binary.
///
/// Declare each generated plugin module (`<dir>/<name>/plugin.rs`) in
/// this crate and list its descriptor here, eg.:
///
/// ```ignore
/// #[path = "../../../ui-plugins/my_plugin/plugin.rs"]
/// mod my_plugin;
///
/// vec![my_plugin::plugin()]
/// ```
fn compiled_plugins() -> Vec<UiPlugin> {
    Vec::new()
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve(args) => serve(args).await,
        Command::Plug(args) => {
            if let Err(e) = args.run().await {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }
}

fn app(registry: Arc<UiPluginRegistry>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .merge(ui_plugin_router(registry))
        .layer(TraceLayer::new_for_http())
}

async fn serve(args: ServeArgs) {
    // Registration window closes here; the registry is frozen before the
    // listener accepts its first connection.
    let mut registry = UiPluginRegistry::new();
    registry.register(compiled_plugins());
    let registry = Arc::new(registry);

    tracing::info!(plugins = registry.plugins().len(), "UI plugin registry frozen");

    let addr = args.addr.unwrap_or_else(|| {
        std::env::var("PANELKIT_ADDR")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 8090)))
    });

    tracing::info!(%addr, "server started");

    axum::serve(
        tokio::net::TcpListener::bind(addr)
            .await
            .expect("failed to bind listen address"),
        app(registry),
    )
    .await
    .expect("server error");
}

async fn healthz() -> Json<ApiStatus> {
    Json(ApiStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

// ─── Tests ──────────────────────────────────────────────────────────────
