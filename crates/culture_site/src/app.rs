//! Site startup.
//!
//! `Site::init` is the single place content enters the process: it is read
//! and validated once, then shared read-only with the renderer and the form.

use std::sync::Arc;
use tracing::info;

use culture_content::{load_content, ContentDocument, ContentLoadError};
use culture_form::{ContactForm, SimulatedSubmission, SubmissionHandler};

use crate::config::SiteConfig;
use crate::page::{render_page, PageState};

pub struct Site {
    config: SiteConfig,
    content: Arc<ContentDocument>,
}

impl Site {
    /// Load and validate the configured content document.
    pub fn init(config: SiteConfig) -> Result<Self, ContentLoadError> {
        let content = load_content(&config.content_path)?;
        info!(content = %config.content_path.display(), "Site initialised");
        Ok(Self::with_content(config, content))
    }

    pub fn with_content(config: SiteConfig, content: ContentDocument) -> Self {
        Self {
            config,
            content: Arc::new(content),
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn content(&self) -> Arc<ContentDocument> {
        Arc::clone(&self.content)
    }

    /// A blank contact form bound to this site's copy.
    pub fn contact_form<H: SubmissionHandler>(&self, handler: H) -> ContactForm<H> {
        ContactForm::new(self.content(), handler, self.config.form.settings())
    }

    /// The simulated handler with the configured latency.
    pub fn simulated_handler(&self, fail: bool) -> SimulatedSubmission {
        let latency = self.config.form.submit_latency();
        if fail {
            SimulatedSubmission::failing(latency)
        } else {
            SimulatedSubmission::new(latency)
        }
    }

    /// Page state for a fresh visit.
    pub fn initial_state(&self, year: i32) -> PageState {
        PageState::initial(self.config.chrome.scroll_top_threshold, year)
    }

    pub fn render(&self, state: &PageState) -> String {
        render_page(&self.content, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use culture_form::SubmissionPhase;
    use std::path::PathBuf;

    fn config() -> SiteConfig {
        SiteConfig {
            content_path: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../content/home.json"),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_init_shares_one_document() {
        let site = Site::init(config()).unwrap();
        let form = site.contact_form(site.simulated_handler(false));
        assert!(Arc::ptr_eq(&site.content(), &site.content()));
        assert_eq!(form.phase(), SubmissionPhase::Idle);
        assert_eq!(form.copy().submit_idle_label, "Send enquiry");
    }

    #[test]
    fn test_init_fails_on_missing_content() {
        let config = SiteConfig {
            content_path: PathBuf::from("does/not/exist.json"),
            ..SiteConfig::default()
        };
        assert!(matches!(Site::init(config), Err(ContentLoadError::Io { .. })));
    }

    #[test]
    fn test_initial_state_uses_configured_threshold() {
        let mut cfg = config();
        cfg.chrome.scroll_top_threshold = 100;
        let site = Site::init(cfg).unwrap();
        let mut state = site.initial_state(2026);
        state.scroll.on_scroll(150);
        assert!(state.scroll.is_visible());
        assert!(site.render(&state).contains("scroll-top"));
    }
}
