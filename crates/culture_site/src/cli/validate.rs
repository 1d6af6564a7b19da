//! `validate` - check a content document against the page contract.

use anyhow::Result;
use std::path::PathBuf;

use culture_content::{lint, load_content, ContentLoadError};
use culture_site::SiteConfig;

use crate::cli::error::HelpfulError;

#[derive(Debug, clap::Args)]
pub struct ValidateArgs {
    /// Content document (default: `content_path` from site.toml)
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ValidateArgs, config: &SiteConfig) -> Result<()> {
    let path = args.content.unwrap_or_else(|| config.content_path.clone());

    let doc = match load_content(&path) {
        Ok(doc) => doc,
        Err(err @ ContentLoadError::Invalid { .. }) => {
            if let Some(invalid) = err.validation() {
                if args.json {
                    let report = serde_json::json!({
                        "valid": false,
                        "content": path.to_string_lossy(),
                        "violations": invalid.violations,
                    });
                    println!("{}", serde_json::to_string_pretty(&report)?);
                } else {
                    print!("{}", invalid.report());
                }
            }
            let count = err.validation().map_or(0, |v| v.violations.len());
            return Err(HelpfulError::content_invalid(&path, count).into());
        }
        Err(err) => return Err(HelpfulError::from_load_error(&err).into()),
    };

    let lints = lint(&doc);
    let anchors: Vec<&str> = doc.section_anchors().iter().map(|a| a.id).collect();

    if args.json {
        let report = serde_json::json!({
            "valid": true,
            "content": path.to_string_lossy(),
            "anchors": anchors,
            "lints": lints,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("CONTENT OK: {}", path.display());
        println!();
        println!("Sections: {}", anchors.join(", "));
        println!("Tiers:    {}", doc.pricing_section.tiers.len());
        println!("FAQ:      {}", doc.faq_section.items.len());
        if lints.is_empty() {
            println!("Lints:    none");
        } else {
            println!("Lints:    {}", lints.len());
            for item in &lints {
                println!("  - {}", item);
            }
        }
    }

    Ok(())
}
