mod commands;
mod output;

use anyhow::{Context, Result};
use bookstack_api::{is_category, Client, Config, ErrorCategory};
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "bookstack")]
#[command(about = "Browse, search and export content from a BookStack instance")]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List books
    Books(commands::books::BooksArgs),
    /// List pages
    Pages(commands::pages::PagesArgs),
    /// Show a single page
    Page(commands::pages::PageArgs),
    /// Search books, chapters, pages and shelves
    Search(commands::search::SearchArgs),
    /// Export a page as markdown or PDF
    Export(commands::export::ExportArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bookstack=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let client = Client::new(config)
        .context("set BOOKSTACK_URL, BOOKSTACK_TOKEN_ID and BOOKSTACK_TOKEN_SECRET")?;

    let result = match &cli.command {
        Commands::Books(args) => commands::books::run(args, &client, &cli.output).await,
        Commands::Pages(args) => commands::pages::run_list(args, &client, &cli.output).await,
        Commands::Page(args) => commands::pages::run_show(args, &client, &cli.output).await,
        Commands::Search(args) => commands::search::run(args, &client, &cli.output).await,
        Commands::Export(args) => commands::export::run(args, &client).await,
    };

    if let Err(ref e) = result {
        if is_category(e.as_ref(), ErrorCategory::Unauthorized) {
            tracing::error!("The API token was rejected; check BOOKSTACK_TOKEN_ID and BOOKSTACK_TOKEN_SECRET");
        } else if is_category(e.as_ref(), ErrorCategory::Forbidden) {
            tracing::error!("The API token lacks permission for this action");
        }
    }
    result
}
