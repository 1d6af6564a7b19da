//! `icons` - inspect the icon registry.

use anyhow::Result;
use clap::Subcommand;

use culture_content::{resolve_icon, Icon};

#[derive(Debug, clap::Args)]
pub struct IconsArgs {
    #[command(subcommand)]
    pub action: Option<IconsAction>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum IconsAction {
    /// Show which icon an id renders as
    Resolve {
        /// Icon id as written in content
        id: String,
    },
}

pub fn run(args: IconsArgs) -> Result<()> {
    match args.action {
        None => list(args.json),
        Some(IconsAction::Resolve { id }) => resolve(&id, args.json),
    }
}

fn list(json: bool) -> Result<()> {
    if json {
        let icons: Vec<_> = Icon::KNOWN
            .iter()
            .map(|icon| serde_json::json!({ "id": icon.id(), "label": icon.label() }))
            .collect();
        let body = serde_json::json!({
            "icons": icons,
            "fallback": Icon::Fallback.id(),
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        for icon in Icon::KNOWN {
            println!("{:<16} {}", icon.id(), icon.label());
        }
        println!();
        println!("Unknown ids render as: {}", Icon::Fallback.id());
    }
    Ok(())
}

fn resolve(id: &str, json: bool) -> Result<()> {
    let icon = resolve_icon(id);
    if json {
        let body = serde_json::json!({
            "id": id,
            "icon": icon.id(),
            "fallback": icon.is_fallback(),
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else if icon.is_fallback() {
        println!("{} -> {} (unknown id, fallback)", id, icon.id());
    } else {
        println!("{} -> {}", id, icon.id());
    }
    Ok(())
}
