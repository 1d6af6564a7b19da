//! Page Composition
//!
//! The homepage is a pure function of the validated content and a small
//! amount of view state (menu open, scroll offset, form snapshot). Nothing
//! here reads files or mutates content.

mod chrome;
mod form_view;
mod html;
mod sections;

pub use chrome::{NavState, ScrollBehavior, ScrollRequest, ScrollToTop};
pub use form_view::FormView;
pub use html::escape;
pub use sections::POPULAR_BADGE;

use culture_content::{ClassIconRenderer, ContentDocument, IconRenderer};

use html::Html;

/// Interactive state the page is rendered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub nav: NavState,
    pub scroll: ScrollToTop,
    pub form: FormView,
    /// Case study whose "read more" panel is open
    pub open_case_study: Option<usize>,
    /// Expanded FAQ item
    pub open_faq: Option<usize>,
    /// Year shown in the footer copyright line
    pub year: i32,
}

impl PageState {
    /// Freshly loaded page: menu closed, at the top, blank form.
    pub fn initial(scroll_top_threshold: u32, year: i32) -> Self {
        Self {
            nav: NavState::default(),
            scroll: ScrollToTop::new(scroll_top_threshold),
            form: FormView::default(),
            open_case_study: None,
            open_faq: None,
            year,
        }
    }
}

/// Render the full HTML document.
pub fn render_page(doc: &ContentDocument, state: &PageState) -> String {
    render_page_with(doc, state, &ClassIconRenderer)
}

pub fn render_page_with(doc: &ContentDocument, state: &PageState, icons: &dyn IconRenderer) -> String {
    let mut html = Html::new();
    html.raw("<!DOCTYPE html>").newline();
    html.open("html", &[("lang", "en")]).newline();
    html.open("head", &[]);
    html.void("meta", &[("charset", "utf-8")]);
    html.void("meta", &[("name", "viewport"), ("content", "width=device-width, initial-scale=1")]);
    html.element("title", &[], &doc.site.meta.title);
    html.void("meta", &[("name", "description"), ("content", doc.site.meta.description.as_str())]);
    html.close("head").newline();
    html.open("body", &[]).newline();

    sections::header(&mut html, doc, state);
    html.open("main", &[]).newline();
    sections::hero(&mut html, doc);
    sections::social_proof(&mut html, doc);
    sections::services(&mut html, doc, icons);
    sections::approach(&mut html, doc);
    sections::results(&mut html, doc, state);
    sections::testimonials(&mut html, doc);
    sections::pricing(&mut html, doc);
    sections::faq(&mut html, doc, state);
    sections::contact(&mut html, doc, state);
    html.close("main").newline();
    sections::footer(&mut html, doc, state, icons);

    html.close("body").newline();
    html.close("html").newline();
    html.finish()
}
