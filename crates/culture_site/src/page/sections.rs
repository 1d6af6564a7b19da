//! Markup for each page section, in editorial order.

use culture_content::{ContentDocument, IconRenderer, Link};

use super::form_view::render_form;
use super::html::Html;
use super::PageState;

pub const POPULAR_BADGE: &str = "Most popular";
const MENU_LABEL: &str = "Toggle menu";
const SCROLL_TOP_LABEL: &str = "Scroll to top";

pub(crate) fn header(html: &mut Html, doc: &ContentDocument, state: &PageState) {
    let header = &doc.header;
    html.open("header", &[("class", "site-header")]);
    html.element("a", &[("class", "logo"), ("href", "#")], &header.logo_text);

    html.open("nav", &[("class", "nav-desktop")]);
    for link in &header.nav_links {
        link_to(html, link, &[]);
    }
    html.close("nav");
    link_to(html, &header.primary_cta, &[("class", "button button-primary")]);

    let expanded = if state.nav.is_open() { "true" } else { "false" };
    html.element(
        "button",
        &[("class", "nav-toggle"), ("aria-expanded", expanded), ("aria-controls", "mobile-nav")],
        MENU_LABEL,
    );
    if state.nav.is_open() {
        html.open("nav", &[("class", "nav-mobile"), ("id", "mobile-nav")]);
        for link in &header.nav_links {
            link_to(html, link, &[]);
        }
        link_to(html, &header.primary_cta, &[("class", "button button-primary")]);
        html.close("nav");
    }
    html.close("header").newline();
}

pub(crate) fn hero(html: &mut Html, doc: &ContentDocument) {
    let hero = &doc.hero;
    html.open("section", &[("class", "hero")]);
    html.element("h1", &[], &hero.heading);
    html.element("p", &[("class", "lead")], &hero.subheading);
    html.open("div", &[("class", "hero-actions")]);
    link_to(html, &hero.primary_cta, &[("class", "button button-primary")]);
    link_to(html, &hero.secondary_cta, &[("class", "button button-secondary")]);
    html.close("div");
    list(html, "trust-bullets", &hero.trust_bullets);
    html.close("section").newline();
}

pub(crate) fn social_proof(html: &mut Html, doc: &ContentDocument) {
    let proof = &doc.social_proof;
    html.open("section", &[("class", "social-proof")]);
    html.open("dl", &[("class", "metrics")]);
    for metric in &proof.metrics {
        html.open("div", &[("class", "metric")]);
        html.element("dt", &[], &metric.value);
        html.element("dd", &[], &metric.label);
        html.close("div");
    }
    html.close("dl");
    html.element("p", &[("class", "clients")], &proof.selected_clients_line);
    html.close("section").newline();
}

pub(crate) fn services(html: &mut Html, doc: &ContentDocument, icons: &dyn IconRenderer) {
    let section = &doc.services_section;
    section_open(html, &section.id, &section.title, &section.subtitle);
    html.open("div", &[("class", "grid services")]);
    for item in &section.items {
        html.open("article", &[("class", "card")]);
        html.raw(&icons.render(item.icon()));
        html.element("h3", &[], &item.title);
        html.element("p", &[], &item.description);
        html.close("article");
    }
    html.close("div");
    html.close("section").newline();
}

pub(crate) fn approach(html: &mut Html, doc: &ContentDocument) {
    let section = &doc.approach_section;
    section_open(html, &section.id, &section.title, &section.subtitle);
    html.open("ol", &[("class", "steps")]);
    for step in &section.steps {
        html.open("li", &[("class", "step")]);
        html.element("span", &[("class", "step-number")], &step.step);
        html.element("h3", &[], &step.title);
        html.element("p", &[], &step.description);
        list(html, "outcomes", &step.outcomes);
        html.close("li");
    }
    html.close("ol");
    html.close("section").newline();
}

pub(crate) fn results(html: &mut Html, doc: &ContentDocument, state: &PageState) {
    let section = &doc.results_section;
    section_open(html, &section.id, &section.title, &section.subtitle);
    html.open("div", &[("class", "grid case-studies")]);
    for (index, study) in section.case_studies.iter().enumerate() {
        html.open("article", &[("class", "card case-study")]);
        html.element("span", &[("class", "badge")], &study.client_type);
        html.element("p", &[("class", "challenge")], &study.challenge);
        html.element("h4", &[], &study.solution_heading);
        html.element("p", &[], &study.solution);
        html.element("h4", &[], &study.result_heading);
        html.element("p", &[("class", "result")], &study.result);
        if state.open_case_study == Some(index) {
            html.open("div", &[("class", "case-study-details"), ("role", "dialog")]);
            html.element("p", &[], &study.details);
            html.element("button", &[("class", "close")], &study.close_label);
            html.close("div");
        } else {
            html.element("button", &[("class", "read-more")], &study.read_more_label);
        }
        html.close("article");
    }
    html.close("div");
    html.close("section").newline();
}

pub(crate) fn testimonials(html: &mut Html, doc: &ContentDocument) {
    let section = &doc.testimonials_section;
    section_open(html, &section.id, &section.title, &section.subtitle);
    html.open("div", &[("class", "grid testimonials")]);
    for item in &section.items {
        html.open("figure", &[("class", "card testimonial")]);
        html.element("blockquote", &[], &item.quote);
        html.open("figcaption", &[]);
        html.element("span", &[("class", "avatar"), ("aria-hidden", "true")], &item.initials());
        html.element("strong", &[], &item.name);
        html.element("span", &[("class", "role")], &format!("{}, {}", item.role, item.company));
        html.close("figcaption");
        html.close("figure");
    }
    html.close("div");
    html.close("section").newline();
}

pub(crate) fn pricing(html: &mut Html, doc: &ContentDocument) {
    let section = &doc.pricing_section;
    section_open(html, &section.id, &section.title, &section.subtitle);
    html.open("div", &[("class", "grid tiers")]);
    for tier in &section.tiers {
        let class = if tier.popular { "card tier tier-popular" } else { "card tier" };
        html.open("article", &[("class", class)]);
        if tier.popular {
            html.element("span", &[("class", "badge badge-popular")], POPULAR_BADGE);
        }
        html.element("h3", &[], &tier.name);
        html.open("p", &[("class", "price")]);
        html.element("strong", &[], &tier.price);
        html.text(" ");
        html.element("span", &[("class", "price-suffix")], &tier.price_suffix);
        html.close("p");
        html.element("p", &[], &tier.description);
        list(html, "features", &tier.features);
        let link = Link::new(tier.cta_label.as_str(), tier.cta_href.as_str());
        let button = if tier.popular { "button button-primary" } else { "button button-secondary" };
        link_to(html, &link, &[("class", button)]);
        html.close("article");
    }
    html.close("div");
    html.element("p", &[("class", "footnote")], &section.footnote);
    html.close("section").newline();
}

pub(crate) fn faq(html: &mut Html, doc: &ContentDocument, state: &PageState) {
    let section = &doc.faq_section;
    section_open(html, &section.id, &section.title, &section.subtitle);
    html.open("div", &[("class", "accordion")]);
    for (index, item) in section.items.iter().enumerate() {
        if state.open_faq == Some(index) {
            html.open("details", &[("open", "")]);
        } else {
            html.open("details", &[]);
        }
        html.element("summary", &[], &item.question);
        html.element("p", &[], &item.answer);
        html.close("details");
    }
    html.close("div");
    html.close("section").newline();
}

pub(crate) fn contact(html: &mut Html, doc: &ContentDocument, state: &PageState) {
    let section = &doc.contact_section;
    section_open(html, &section.id, &section.title, &section.subtitle);

    let details = &section.details;
    html.open("address", &[("class", "contact-details")]);
    let mailto = format!("mailto:{}", details.email);
    html.element("a", &[("href", mailto.as_str())], &details.email);
    if let Some(phone) = &details.phone {
        let tel = format!("tel:{}", phone.replace(' ', ""));
        html.element("a", &[("href", tel.as_str())], phone);
    }
    html.element("span", &[], &details.location);
    html.element("span", &[], &details.hours);
    html.close("address");

    render_form(html, &section.form, &state.form);
    html.close("section").newline();
}

pub(crate) fn footer(html: &mut Html, doc: &ContentDocument, state: &PageState, icons: &dyn IconRenderer) {
    let footer = &doc.footer;
    html.open("footer", &[("class", "site-footer")]);
    html.open("div", &[("class", "brand")]);
    html.element("strong", &[], &footer.brand_name);
    html.element("p", &[], &footer.brand_blurb);
    html.close("div");

    for column in &footer.columns {
        html.open("div", &[("class", "footer-column")]);
        html.element("h4", &[], &column.title);
        html.open("ul", &[]);
        for link in &column.links {
            html.open("li", &[]);
            link_to(html, link, &[]);
            html.close("li");
        }
        html.close("ul");
        html.close("div");
    }

    html.open("div", &[("class", "social")]);
    for social in &footer.social_links {
        html.open(
            "a",
            &[("href", social.href.as_str()), ("aria-label", social.label.as_str()), ("rel", "noopener")],
        );
        html.raw(&icons.render(social.icon()));
        html.close("a");
    }
    html.close("div");

    let copyright = format!("© {} {}", state.year, footer.brand_name);
    html.element("p", &[("class", "copyright")], &copyright);
    html.close("footer").newline();

    if state.scroll.is_visible() {
        html.element(
            "button",
            &[("class", "scroll-top"), ("aria-label", SCROLL_TOP_LABEL)],
            "↑",
        );
    }
}

fn section_open(html: &mut Html, id: &str, title: &str, subtitle: &str) {
    html.open("section", &[("id", id)]);
    html.element("h2", &[], title);
    html.element("p", &[("class", "subtitle")], subtitle);
}

fn link_to(html: &mut Html, link: &Link, attrs: &[(&str, &str)]) {
    let mut all = vec![("href", link.href.as_str())];
    all.extend_from_slice(attrs);
    html.element("a", &all, &link.label);
}

fn list(html: &mut Html, class: &str, items: &[String]) {
    html.open("ul", &[("class", class)]);
    for item in items {
        html.element("li", &[], item);
    }
    html.close("ul");
}
