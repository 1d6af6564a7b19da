//! Content Lints
//!
//! Problems that do not break the contract but that an editor probably wants
//! to know about. A lint never rejects a document.

use serde::Serialize;
use std::fmt;

use crate::icons::is_known_icon;
use crate::model::{ContentDocument, Link};

/// Types of content lints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LintKind {
    /// `iconId` is not in the registry and will render as the fallback icon
    UnknownIcon,

    /// `#fragment` link that targets no section id
    DanglingAnchor,
}

/// A non-fatal content warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentLint {
    pub path: String,
    pub kind: LintKind,
    pub value: String,
}

impl fmt::Display for ContentLint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LintKind::UnknownIcon => write!(
                f,
                "{}: unknown icon '{}' will render as the fallback icon",
                self.path, self.value
            ),
            LintKind::DanglingAnchor => write!(
                f,
                "{}: link '{}' points at no section on the page",
                self.path, self.value
            ),
        }
    }
}

/// Collect every lint for a validated document, in document order.
pub fn lint(doc: &ContentDocument) -> Vec<ContentLint> {
    let mut lints = Vec::new();

    let mut check_link = |path: String, href: &str| {
        let link = Link::new("", href);
        if let Some(anchor) = link.anchor() {
            if !doc.has_anchor(anchor) {
                lints.push(ContentLint {
                    path,
                    kind: LintKind::DanglingAnchor,
                    value: href.to_string(),
                });
            }
        }
    };

    check_link("header.primaryCta.href".to_string(), &doc.header.primary_cta.href);
    for (i, link) in doc.header.nav_links.iter().enumerate() {
        check_link(format!("header.navLinks[{}].href", i), &link.href);
    }
    check_link("hero.primaryCta.href".to_string(), &doc.hero.primary_cta.href);
    check_link("hero.secondaryCta.href".to_string(), &doc.hero.secondary_cta.href);
    for (i, tier) in doc.pricing_section.tiers.iter().enumerate() {
        check_link(format!("pricingSection.tiers[{}].ctaHref", i), &tier.cta_href);
    }
    for (i, column) in doc.footer.columns.iter().enumerate() {
        for (j, link) in column.links.iter().enumerate() {
            check_link(format!("footer.columns[{}].links[{}].href", i, j), &link.href);
        }
    }

    for (i, item) in doc.services_section.items.iter().enumerate() {
        if !is_known_icon(&item.icon_id) {
            lints.push(ContentLint {
                path: format!("servicesSection.items[{}].iconId", i),
                kind: LintKind::UnknownIcon,
                value: item.icon_id.clone(),
            });
        }
    }
    for (i, social) in doc.footer.social_links.iter().enumerate() {
        if !is_known_icon(&social.icon_id) {
            lints.push(ContentLint {
                path: format!("footer.socialLinks[{}].iconId", i),
                kind: LintKind::UnknownIcon,
                value: social.icon_id.clone(),
            });
        }
    }

    lints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate;
    use serde_json::{json, Value};

    fn home() -> Value {
        serde_json::from_str(include_str!("../../../content/home.json")).unwrap()
    }

    #[test]
    fn test_home_document_is_clean() {
        let doc = validate(&home()).unwrap();
        assert!(lint(&doc).is_empty(), "{:?}", lint(&doc));
    }

    #[test]
    fn test_unknown_icon_and_dangling_anchor() {
        let mut raw = home();
        raw["servicesSection"]["items"][1]["iconId"] = json!("rocket");
        raw["header"]["navLinks"][0]["href"] = json!("#servces");
        let doc = validate(&raw).unwrap();

        let lints = lint(&doc);
        assert_eq!(lints.len(), 2);
        assert_eq!(lints[0].kind, LintKind::DanglingAnchor);
        assert_eq!(lints[0].path, "header.navLinks[0].href");
        assert_eq!(lints[1].kind, LintKind::UnknownIcon);
        assert_eq!(lints[1].path, "servicesSection.items[1].iconId");
        assert!(lints[1].to_string().contains("rocket"));
    }

    #[test]
    fn test_placeholder_and_external_links_are_fine() {
        let mut raw = home();
        raw["footer"]["columns"][0]["links"][0]["href"] = json!("#");
        raw["hero"]["secondaryCta"]["href"] = json!("https://example.com/brochure.pdf");
        let doc = validate(&raw).unwrap();
        assert!(lint(&doc).is_empty());
    }
}
