//! Culture Site - Unified CLI
//!
//! Usage:
//!   culture_site validate          # Check content/home.json
//!   culture_site render --out dist # Write dist/index.html
//!   culture_site submit --enquiry enquiry.json

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use culture_logging::{init_logging, LogConfig};
use culture_site::SiteConfig;

mod cli;

use cli::error::HelpfulError;

#[derive(Parser, Debug)]
#[command(name = "culture_site", about = "Build and check the consultancy homepage")]
struct Cli {
    /// Enable verbose logging (info/debug to stderr)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// Site configuration file (default: ./site.toml if present)
    #[arg(long, global = true, env = "CULTURE_SITE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate the content document and report lints
    Validate(cli::validate::ValidateArgs),

    /// Render the homepage to index.html
    Render(cli::render::RenderArgs),

    /// Send an enquiry through the contact form (simulated handler)
    Submit(cli::submit::SubmitArgs),

    /// List icons or resolve an icon id
    Icons(cli::icons::IconsArgs),

    /// Show the resolved configuration
    Config(cli::config::ConfigArgs),
}

fn command_wants_json(command: &Commands) -> bool {
    match command {
        Commands::Validate(args) => args.json,
        Commands::Submit(args) => args.json,
        Commands::Icons(args) => args.json,
        Commands::Config(args) => args.json,
        Commands::Render(_) => false,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json_mode = command_wants_json(&cli.command);

    if let Err(err) = init_logging(LogConfig {
        app_name: "culture_site",
        verbose: cli.verbose,
        log_dir: None,
    }) {
        eprintln!("Warning: file logging disabled: {:#}", err);
    }

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if json_mode {
                cli::error::print_json_error(&err);
            } else {
                eprintln!("{:?}", err);
            }
            ExitCode::from(1)
        }
    }
}

fn run_command(cli: Cli) -> Result<()> {
    let (config, source) = SiteConfig::resolve(cli.config.as_deref())
        .map_err(|err| HelpfulError::from_config_error(&err))?;
    if let Some(path) = &source {
        tracing::debug!(config = %path.display(), "Loaded site config");
    }

    match cli.command {
        Commands::Validate(args) => cli::validate::run(args, &config),
        Commands::Render(args) => cli::render::run(args, &config),
        Commands::Submit(args) => cli::submit::run(args, &config),
        Commands::Icons(args) => cli::icons::run(args),
        Commands::Config(args) => cli::config::run(args, &config, source.as_deref()),
    }
}
