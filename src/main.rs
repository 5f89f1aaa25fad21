#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use homepage_core::{logging, SiteConfig};

/// Global site content, set once from the command line
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Get the site content (loaded config or the built-in sample)
pub fn get_site_config() -> SiteConfig {
    SITE_CONFIG.get().cloned().unwrap_or_default()
}

/// Family Homepage - gallery, live clock and contact form
#[derive(Parser, Debug)]
#[command(name = "homepage-desktop")]
#[command(about = "Family homepage - photo gallery, live clock, contact form and music")]
struct Args {
    /// Site content file (JSON); the built-in sample site is used if omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Window title (defaults to the site owner's name)
    #[arg(short, long)]
    title: Option<String>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

fn main() -> anyhow::Result<()> {
    logging::init(logging::DEFAULT_FILTER)?;

    let args = Args::parse();

    let site = SiteConfig::load_or_default(args.config.as_deref())
        .context("failed to load site config")?;

    let title = args.title.clone().unwrap_or_else(|| site.owner.clone());

    tracing::info!(
        "Starting '{}' with {} photos and {} family cards",
        title,
        site.gallery.len(),
        site.family.len()
    );

    let _ = SITE_CONFIG.set(site);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
