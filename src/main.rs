use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use techflow::api::HttpIssueApi;
use techflow::config::Config;
use techflow::logger::Logger;
use techflow::ui;

/// Terminal client for the TechFlow issue tracker
#[derive(Parser, Debug)]
#[command(name = "techflow")]
#[command(version)]
#[command(about = "Triage and report TechFlow issues from the terminal")]
struct Args {
    /// Path to configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base URL of the TechFlow server, overrides the configuration file
    #[arg(long, env = "TECHFLOW_BASE_URL")]
    base_url: Option<String>,

    /// Write a default configuration file and exit
    #[arg(long)]
    generate_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.generate_config {
        let path = match args.config {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    if let Some(base_url) = args.base_url {
        config = config.with_base_url(base_url)?;
    }

    let logger = Logger::from_config(config.logging.enabled).context("Failed to initialize logging")?;
    log::info!("Starting TechFlow client against {}", config.server.base_url);

    let api = HttpIssueApi::new(&config.server.base_url)?;

    ui::run_app(config, Arc::new(api), logger).await
}
