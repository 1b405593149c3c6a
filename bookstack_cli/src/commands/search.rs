use anyhow::{Context, Result};
use bookstack_api::{Client, SearchQuery};
use clap::Args;

use crate::output::{print_json, print_search_results, OutputFormat};

#[derive(Args)]
pub struct SearchArgs {
    /// Search terms, using BookStack search syntax
    pub query: String,

    /// Results per page
    #[arg(long, default_value = "10")]
    pub count: i64,

    /// Number of results to skip
    #[arg(long, default_value = "0")]
    pub offset: i64,
}

pub async fn run(args: &SearchArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let query = SearchQuery::new(&args.query)
        .with_count(args.count)
        .with_offset(args.offset);

    let results = client
        .search()
        .search(&query)
        .await
        .with_context(|| format!("searching for {:?}", args.query))?;

    match format {
        OutputFormat::Table => print_search_results(&args.query, &results),
        OutputFormat::Json => print_json(&results),
    }

    Ok(())
}
