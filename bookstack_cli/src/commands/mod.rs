//! CLI subcommand implementations.

pub mod books;
pub mod export;
pub mod pages;
pub mod search;
