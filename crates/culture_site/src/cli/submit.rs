//! `submit` - run an enquiry through the contact form.
//!
//! Uses the simulated handler, so nothing leaves the machine. The enquiry
//! file holds form values as JSON (`fullName`, `email`, `areasOfInterest`,
//! ...); missing keys are blank.

use anyhow::Result;
use std::path::{Path, PathBuf};

use culture_form::{ContactFormValues, SubmissionPhase, SubmitOutcome};
use culture_site::{Site, SiteConfig};

use crate::cli::error::HelpfulError;

#[derive(Debug, clap::Args)]
pub struct SubmitArgs {
    /// JSON file with the form values
    #[arg(long, value_name = "FILE")]
    pub enquiry: PathBuf,

    /// Make the simulated handler fail
    #[arg(long)]
    pub fail: bool,

    /// After success, wait for the form to return to idle
    #[arg(long)]
    pub wait_reset: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: SubmitArgs, config: &SiteConfig) -> Result<()> {
    let values = read_enquiry(&args.enquiry)?;
    let site = Site::init(config.clone()).map_err(|err| HelpfulError::from_load_error(&err))?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    rt.block_on(async { run_async(&args, &site, values).await })
}

fn read_enquiry(path: &Path) -> Result<ContactFormValues> {
    let text = std::fs::read_to_string(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => HelpfulError::file_not_found(path),
        _ => HelpfulError::new(format!("Cannot read file: {}", path.display()))
            .with_context(err.to_string()),
    })?;
    let values = serde_json::from_str(&text)
        .map_err(|err| HelpfulError::json_parse_error(path, &err.to_string()))?;
    Ok(values)
}

async fn run_async(args: &SubmitArgs, site: &Site, values: ContactFormValues) -> Result<()> {
    let mut form = site.contact_form(site.simulated_handler(args.fail));
    form.fill(values);

    let outcome = form.submit().await?;
    if args.wait_reset {
        form.wait_for_reset().await;
    }

    if args.json {
        let body = serde_json::json!({
            "result": outcome,
            "phase": form.phase(),
            "notice": form.notice(),
            "history": form.history(),
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        print_outcome(&outcome, form.copy().success_title.as_str(), form.phase());
        if !form.history().is_empty() {
            println!();
            println!("Phase trail:");
            for step in form.history() {
                println!(
                    "  {} -> {}  {}  ({})",
                    step.from,
                    step.to,
                    step.timestamp.format("%H:%M:%S%.3f"),
                    step.reason
                );
            }
        }
    }

    match outcome {
        SubmitOutcome::Accepted { .. } => Ok(()),
        SubmitOutcome::Invalid { errors } => Err(HelpfulError::new(format!(
            "Enquiry has {} invalid field(s)",
            errors.len()
        ))
        .with_context(format!("Nothing was sent: {}", args.enquiry.display()))
        .with_suggestion("TRY: Fix the fields listed above and submit again")
        .into()),
        SubmitOutcome::Failed { error, transient } => {
            let mut err = HelpfulError::new("Enquiry could not be sent").with_context(error);
            if transient {
                err = err.with_suggestion("TRY: Submit again; the form kept your values");
            }
            Err(err.into())
        }
    }
}

fn print_outcome(outcome: &SubmitOutcome, success_title: &str, phase: SubmissionPhase) {
    match outcome {
        SubmitOutcome::Accepted { receipt } => {
            println!("{}", success_title);
            println!("  submission: {}", receipt.submission_id);
            println!("  received:   {}", receipt.submitted_at.to_rfc3339());
            println!("  phase:      {}", phase);
        }
        SubmitOutcome::Invalid { errors } => {
            println!("Enquiry not sent:");
            for error in errors {
                println!("  - {}", error);
            }
        }
        SubmitOutcome::Failed { error, .. } => {
            println!("Enquiry failed: {}", error);
        }
    }
}
