//! `render` - write the homepage to `<out>/index.html`.

use anyhow::{Context, Result};
use chrono::Datelike;
use std::path::PathBuf;
use tracing::info;

use culture_site::{Site, SiteConfig};

use crate::cli::error::HelpfulError;

pub const INDEX_FILE: &str = "index.html";

#[derive(Debug, clap::Args)]
pub struct RenderArgs {
    /// Content document (default: `content_path` from site.toml)
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// Output directory (default: `output_dir` from site.toml)
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: RenderArgs, config: &SiteConfig) -> Result<()> {
    let mut config = config.clone();
    if let Some(content) = args.content {
        config.content_path = content;
    }
    if let Some(out) = args.out {
        config.output_dir = out;
    }

    // Validation happens before the output directory is touched.
    let site = Site::init(config).map_err(|err| HelpfulError::from_load_error(&err))?;

    let year = chrono::Local::now().year();
    let html = site.render(&site.initial_state(year));

    let out_dir = &site.config().output_dir;
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;
    let target = out_dir.join(INDEX_FILE);
    std::fs::write(&target, &html)
        .with_context(|| format!("Failed to write {}", target.display()))?;

    info!(path = %target.display(), bytes = html.len(), "Page rendered");
    println!("Rendered {} ({} bytes)", target.display(), html.len());
    Ok(())
}
