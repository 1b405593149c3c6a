use bookstack_api::types::{Book, Page, SearchResult};
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled, Serialize)]
struct BookRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Updated")]
    updated: String,
}

#[derive(Tabled, Serialize)]
struct PageRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Book")]
    book_id: i64,
    #[tabled(rename = "Chapter")]
    chapter: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Draft")]
    draft: String,
    #[tabled(rename = "Updated")]
    updated: String,
}

// -- Row builders --

fn build_book_rows(books: &[Book]) -> Vec<BookRow> {
    books
        .iter()
        .map(|b| BookRow {
            id: b.id,
            name: b.name.clone(),
            slug: b.slug.clone(),
            updated: format_date(b.updated_at),
        })
        .collect()
}

fn build_page_rows(pages: &[Page]) -> Vec<PageRow> {
    pages
        .iter()
        .map(|p| PageRow {
            id: p.id,
            book_id: p.book_id,
            chapter: if p.chapter_id == 0 {
                "-".to_string()
            } else {
                p.chapter_id.to_string()
            },
            name: p.name.clone(),
            draft: if p.draft { "yes" } else { "" }.to_string(),
            updated: format_date(p.updated_at),
        })
        .collect()
}

fn format_search_results(query: &str, results: &[SearchResult]) -> String {
    if results.is_empty() {
        return format!("Search results for {:?}:\n\nNo results found.", query);
    }
    let mut out = format!("Search results for {:?}:\n", query);
    for (i, r) in results.iter().enumerate() {
        out.push_str(&format!(
            "\n{}. [{}] {} (score: {:.1})",
            i + 1,
            r.kind,
            r.name,
            r.score
        ));
        if !r.preview.is_empty() {
            out.push_str(&format!("\n   {}", r.preview));
        }
    }
    out
}

// -- Table output --

pub fn print_books_table(books: &[Book]) {
    println!("{}", Table::new(build_book_rows(books)));
}

pub fn print_pages_table(pages: &[Page]) {
    println!("{}", Table::new(build_page_rows(pages)));
}

pub fn print_search_results(query: &str, results: &[SearchResult]) {
    println!("{}", format_search_results(query, results));
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// First `max` characters of `html`, cut on a character boundary.
pub fn html_excerpt(html: &str, max: usize) -> &str {
    match html.char_indices().nth(max) {
        Some((end, _)) => &html[..end],
        None => html,
    }
}

fn format_date(date: Option<DateTime<Utc>>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
