use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sitemap", about = "Generates a sitemap for a web origin")]
pub struct Cli {
    /// Path to the server config file (only used by `serve`)
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Crawl a single site and print the resulting sitemap as JSON
    Crawl {
        /// The origin URL to crawl
        site: String,
    },
    /// Start the HTTP front-end exposing `/sitemap`, `/ping`, and `/`
    Serve,
}
