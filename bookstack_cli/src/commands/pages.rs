use anyhow::{Context, Result};
use bookstack_api::{Client, ListOptions};
use clap::Args;

use crate::output::{html_excerpt, print_json, print_pages_table, OutputFormat};

#[derive(Args)]
pub struct PagesArgs {
    /// Only list pages in this book
    #[arg(long)]
    pub book_id: Option<i64>,

    /// Results per page
    #[arg(long, default_value = "20")]
    pub count: i64,

    /// Number of pages to skip
    #[arg(long, default_value = "0")]
    pub offset: i64,
}

#[derive(Args)]
pub struct PageArgs {
    /// Page id
    pub id: i64,
}

pub async fn run_list(args: &PagesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut options = ListOptions::default()
        .with_count(args.count)
        .with_offset(args.offset);
    if let Some(book_id) = args.book_id {
        options = options.with_filter("book_id", book_id);
    }

    let pages = client.pages().list(&options).await.context("listing pages")?;

    match format {
        OutputFormat::Table => print_pages_table(&pages),
        OutputFormat::Json => print_json(&pages),
    }

    Ok(())
}

pub async fn run_show(args: &PageArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let page = client
        .pages()
        .get(args.id)
        .await
        .with_context(|| format!("fetching page {}", args.id))?;

    match format {
        OutputFormat::Table => {
            println!("Page {}: {}", page.id, page.name);
            println!("{}", html_excerpt(&page.html, 200));
        }
        OutputFormat::Json => print_json(&page),
    }

    Ok(())
}
