//! Culture Site
//!
//! Startup, configuration and page rendering for the consultancy homepage.
//! The `culture_site` binary wraps this library in a CLI.

pub mod app;
pub mod config;
pub mod page;

pub use app::Site;
pub use config::{ConfigError, SiteConfig};
pub use page::{render_page, FormView, PageState};
