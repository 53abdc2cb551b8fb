mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rickandmorty_lib::{DataService, ServiceConfig};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "rickandmorty")]
#[command(about = "Browse characters from the Rick and Morty API")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the first page of characters, optionally filtered by name
    List(commands::list::ListArgs),
    /// Filter the first page interactively, one search term per line
    Browse,
    /// List one page of characters
    Page(commands::page::PageArgs),
    /// Search characters by name on the server
    Search(commands::search::SearchArgs),
    /// Show a single character
    Show(commands::show::ShowArgs),
    /// Show several characters by ID
    Multi(commands::multi::MultiArgs),
    /// Show character totals
    Info,
    /// List every character across all pages
    All,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rickandmorty=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(cli.output.as_str());

    let config = ServiceConfig::from_env();
    tracing::debug!("Using API at {}", config.base_url);
    let service = DataService::with_config(&config);

    match &cli.command {
        Commands::List(args) => commands::list::run(args, &service, &format).await?,
        Commands::Browse => commands::browse::run(&service, &format).await?,
        Commands::Page(args) => commands::page::run(args, &service, &format).await?,
        Commands::Search(args) => commands::search::run(args, &service, &format).await?,
        Commands::Show(args) => commands::show::run(args, &service, &format).await?,
        Commands::Multi(args) => commands::multi::run(args, &service, &format).await?,
        Commands::Info => commands::info::run(&service, &format).await?,
        Commands::All => commands::all::run(&service, &format).await?,
    }

    Ok(())
}
