use std::{io, path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{ProductFormController, ProductsClient};
use tracing::info;

mod commands;
mod config;
mod orchestration;
mod terminal;

use config::load_settings;
use terminal::TerminalView;

#[derive(Parser, Debug)]
#[command(name = "produtos", about = "Terminal client for the /api/produtos catalog")]
struct Args {
    /// Optional TOML settings file.
    #[arg(long, default_value = "console.toml")]
    config: PathBuf,
    /// Collection endpoint, e.g. http://localhost:3000/api/produtos
    #[arg(long)]
    api_url: Option<String>,
    #[arg(long)]
    log_filter: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    let settings = load_settings(&args.config)?.with_overrides(args.api_url, args.log_filter);

    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .with_writer(io::stderr)
        .init();

    let client = ProductsClient::new(&settings.api_url)
        .with_context(|| format!("cannot use api url '{}'", settings.api_url))?;
    info!(api_url = client.collection_url(), "starting produtos console");

    let mut controller = ProductFormController::new(Arc::new(client));
    let mut view = TerminalView::new(io::stdin().lock(), io::stdout());
    orchestration::run(&mut controller, &mut view).await
}
