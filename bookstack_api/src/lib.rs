//! Typed async client for the BookStack REST API.
//!
//! All requests go through a single dispatcher on [`Client`] that attaches
//! token authentication, classifies failures into [`Error`], and decodes JSON
//! bodies. List endpoints can be consumed page by page with
//! [`Resource::list`] or as a lazy stream with [`Resource::list_all`].
//!
//! ```no_run
//! use bookstack_api::{Client, Config, ErrorCategory, ListOptions};
//!
//! # async fn run() -> Result<(), bookstack_api::Error> {
//! let client = Client::new(Config::new("https://docs.example.com", "id", "secret"))?;
//! let books = client.books().list(&ListOptions::default().with_count(5)).await?;
//! match client.pages().get(42).await {
//!     Err(e) if e.is(ErrorCategory::NotFound) => println!("no such page"),
//!     other => println!("{:?}", other.map(|p| p.name)),
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod errors;
mod paginate;
mod query;
mod resources;
pub mod types;
pub use self::client::{Client, Config, Method, DEFAULT_TIMEOUT};
pub use self::errors::{is_category, ApiError, Error, ErrorCategory};
pub use self::paginate::DEFAULT_PAGE_SIZE;
pub use self::query::{ListOptions, Query, SearchQuery, SortDirection};
pub use self::resources::{
    Attachments, Books, Chapters, Comments, Pages, Resource, Search, Shelves,
};
