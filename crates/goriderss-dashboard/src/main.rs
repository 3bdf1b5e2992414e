//! Entry point for the GoRiderss dashboard desktop app.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

use goriderss_dashboard::app::{DashboardApp, LaunchSettings};
use goriderss_sidebar::{routes, HttpSessionClient, SessionHandle, SidebarConfig, SIDEBAR_CSS};

/// Host page styles embedded at compile time.
const DASHBOARD_CSS: &str = include_str!("../assets/dashboard.css");

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "goriderss-dashboard")]
#[command(about = "GoRiderss rider dashboard")]
struct Args {
    /// Path to a TOML sidebar config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Origin serving /api/me and /api/logout (overrides config and GORIDERSS_API_BASE)
    #[arg(long)]
    api_base: Option<String>,

    /// Route to open first
    #[arg(long, default_value = routes::DASHBOARD)]
    start: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            tracing::info!("Loading sidebar config from {}", path.display());
            SidebarConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?
        }
        None => SidebarConfig::default(),
    }
    .with_env_overrides()
    .with_api_base(args.api_base);

    tracing::info!("Starting GoRiderss dashboard against {}", config.api_base);

    let client = HttpSessionClient::new(config.api_base.clone())
        .context("building session client")?;
    let session = SessionHandle::new(Arc::new(client), config.file_base.clone());

    let settings = Arc::new(LaunchSettings {
        config,
        session,
        start_path: args.start,
    });

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("GoRiderss")
                        .with_inner_size(LogicalSize::new(1280, 820)),
                )
                .with_custom_head(format!(
                    "<style>{}</style><style>{}</style>",
                    SIDEBAR_CSS, DASHBOARD_CSS
                )),
        )
        .with_context(settings)
        .launch(DashboardApp);

    Ok(())
}
