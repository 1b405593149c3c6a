use anyhow::{bail, Context, Result};
use bookstack_api::{Client, ListOptions, SortDirection};
use clap::Args;
use futures::TryStreamExt;

use crate::output::{print_books_table, print_json, OutputFormat};

#[derive(Args)]
pub struct BooksArgs {
    /// Results per page (server default when omitted)
    #[arg(long, default_value = "0")]
    pub count: i64,

    /// Number of books to skip
    #[arg(long, default_value = "0")]
    pub offset: i64,

    /// Sort field (e.g. name, created_at, updated_at)
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long)]
    pub desc: bool,

    /// Field filter as key=value; may be repeated
    #[arg(long = "filter", value_name = "KEY=VALUE")]
    pub filters: Vec<String>,

    /// Fetch every book, following pagination
    #[arg(long, conflicts_with_all = ["count", "offset", "sort", "filters"])]
    pub all: bool,
}

pub async fn run(args: &BooksArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let books = if args.all {
        client
            .books()
            .list_all()
            .try_collect::<Vec<_>>()
            .await
            .context("listing all books")?
    } else {
        let options = build_options(args)?;
        client
            .books()
            .list(&options)
            .await
            .context("listing books")?
    };

    eprintln!("{} books", books.len());

    match format {
        OutputFormat::Table => print_books_table(&books),
        OutputFormat::Json => print_json(&books),
    }

    Ok(())
}

fn build_options(args: &BooksArgs) -> Result<ListOptions> {
    let mut options = ListOptions::default()
        .with_count(args.count)
        .with_offset(args.offset);

    if let Some(ref field) = args.sort {
        let direction = if args.desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        options = options.with_sort(field, direction);
    }

    for filter in &args.filters {
        let (key, value) = parse_filter(filter)?;
        options = options.with_filter(key, value);
    }

    Ok(options)
}

pub(crate) fn parse_filter(raw: &str) -> Result<(&str, &str)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value.trim())),
        _ => bail!("filter must look like key=value, got {:?}", raw),
    }
}
