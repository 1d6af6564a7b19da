//! `config` - show the resolved site configuration.

use std::path::{Path, PathBuf};

use culture_site::SiteConfig;

#[derive(Debug, clap::Args)]
pub struct ConfigArgs {
    /// Show resolved settings in JSON format
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ConfigArgs, config: &SiteConfig, source: Option<&Path>) -> anyhow::Result<()> {
    let logs = culture_logging::logs_dir().ok();
    let source_label = source
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(defaults)".to_string());

    if args.json {
        let body = serde_json::json!({
            "source": source.map(|p| p.to_string_lossy()),
            "content": {
                "path": config.content_path.to_string_lossy(),
                "exists": config.content_path.exists(),
            },
            "output": {
                "path": config.output_dir.to_string_lossy(),
                "exists": config.output_dir.exists(),
            },
            "form": config.form,
            "chrome": config.chrome,
            "logs": logs.as_ref().map(|p: &PathBuf| p.to_string_lossy()),
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        println!("CULTURE SITE CONFIGURATION");
        println!("==========================");
        println!();
        println!("Source:   {}", source_label);
        println!();
        println!(
            "Content:  {} ({})",
            config.content_path.display(),
            if config.content_path.exists() { "exists" } else { "not found" }
        );
        println!("Output:   {}", config.output_dir.display());
        println!();
        println!("Form");
        println!("  submit latency:  {} ms", config.form.submit_latency_ms);
        println!("  success reset:   {} s", config.form.success_reset_secs);
        println!();
        println!("Scroll-to-top threshold: {} px", config.chrome.scroll_top_threshold);
        if let Some(logs) = logs {
            println!();
            println!("Logs:     {}", logs.display());
        }
    }

    Ok(())
}
