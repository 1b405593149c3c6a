use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bookstack_api::Client;
use clap::{Args, ValueEnum};

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    Markdown,
    Pdf,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Page id
    pub page_id: i64,

    /// Export format
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Write to this file instead of the default (stdout for markdown,
    /// page-<id>.pdf for PDF)
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub async fn run(args: &ExportArgs, client: &Client) -> Result<()> {
    let pages = client.pages();
    let data = match args.format {
        ExportFormat::Markdown => pages.export_markdown(args.page_id).await,
        ExportFormat::Pdf => pages.export_pdf(args.page_id).await,
    }
    .with_context(|| format!("exporting page {}", args.page_id))?;

    match (args.format, &args.out) {
        (ExportFormat::Markdown, None) => {
            std::io::stdout()
                .write_all(&data)
                .context("writing markdown to stdout")?;
        }
        (format, out) => {
            let path = out.clone().unwrap_or_else(|| default_path(args.page_id, format));
            std::fs::write(&path, &data)
                .with_context(|| format!("writing {}", path.display()))?;
            eprintln!("Saved to {} ({} bytes)", path.display(), data.len());
        }
    }

    Ok(())
}

fn default_path(page_id: i64, format: ExportFormat) -> PathBuf {
    let extension = match format {
        ExportFormat::Markdown => "md",
        ExportFormat::Pdf => "pdf",
    };
    PathBuf::from(format!("page-{}.{}", page_id, extension))
}
