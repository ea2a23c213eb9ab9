//! Greenhouse API server
//!
//! Serves the plant catalogue as a JSON REST API over HTTP.

mod args;
mod config;
mod error;
mod handlers;
mod server;


use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use config::ServerConfig;
use greenhouse_core::GreenhouseBuilder;
use log::info;
use server::HttpServer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = ServerConfig::from(&args);

    let greenhouse = GreenhouseBuilder::new()
        .with_database_path(args.database_file)
        .with_page_size(args.page_size)
        .build()
        .await
        .context("Failed to initialize greenhouse")?;

    info!("Greenhouse started");

    HttpServer::new(config, greenhouse)
        .start()
        .await
        .context("HTTP server failed")
}
