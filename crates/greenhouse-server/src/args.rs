use std::path::PathBuf;

use clap::Parser;

/// REST API server for the Greenhouse plant catalogue
///
/// Serves a JSON API for listing, searching, creating, updating and deleting
/// plants stored in a local SQLite database. Every option can also be set
/// through the environment variable shown next to it.
#[derive(Parser, Debug)]
#[command(version, about, name = "greenhouse")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/greenhouse/greenhouse.db
    #[arg(long, env = "GREENHOUSE_DATABASE_FILE")]
    pub database_file: Option<PathBuf>,

    /// Address to listen on
    #[arg(long, env = "GREENHOUSE_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "GREENHOUSE_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Number of plants returned per page
    #[arg(long, env = "GREENHOUSE_PAGE_SIZE", default_value_t = greenhouse_core::PLANTS_PER_PAGE)]
    pub page_size: usize,

    /// Origin allowed to make cross-origin requests; repeat for several.
    /// Any origin is allowed when none is given.
    #[arg(long = "cors-origin", env = "GREENHOUSE_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Vec<String>,
}
