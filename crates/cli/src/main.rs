use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use config::AppConfig;

#[derive(Parser)]
#[command(name = "api-explorer")]
#[command(about = "Browse, search and bookmark a catalog of public APIs", long_about = None)]
struct Cli {
    /// Catalog file path or http(s) URL
    #[arg(long, global = true)]
    catalog: Option<String>,
    /// Directory holding persisted bookmarks
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    /// Keep bookmarks in memory only
    #[arg(long, global = true)]
    no_persist: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone)]
pub(crate) struct FilterArgs {
    /// Exact category name, or "All"
    #[arg(short, long, default_value = "All")]
    category: String,
    /// Case-insensitive substring matched against name, description and category
    #[arg(short, long, default_value = "")]
    query: String,
    /// Only show bookmarked entries
    #[arg(short, long)]
    bookmarks_only: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        #[arg(short, long, default_value = "37780")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
        /// Search debounce delay in milliseconds
        #[arg(long)]
        debounce_ms: Option<u64>,
    },
    /// Print entries matching the filters
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Print category counts
    Categories,
    /// Print catalog, bookmark and result counts
    Stats {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Flip the bookmark on an entry
    Toggle { id: String },
    /// Print bookmarked ids
    Bookmarks,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::resolve(cli.catalog, cli.data_dir, cli.no_persist);

    match cli.command {
        Commands::Serve { port, host, debounce_ms } => {
            commands::serve::run(&config, port, host, debounce_ms).await?;
        },
        Commands::List { filter } => commands::browse::run_list(&config, &filter).await?,
        Commands::Categories => commands::browse::run_categories(&config).await?,
        Commands::Stats { filter } => commands::browse::run_stats(&config, &filter).await?,
        Commands::Toggle { id } => commands::bookmarks::run_toggle(&config, &id)?,
        Commands::Bookmarks => commands::bookmarks::run_bookmarks(&config)?,
    }

    Ok(())
}
