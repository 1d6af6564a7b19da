//! Content Document Types
//!
//! The typed shape of every editable field on the homepage. A value of
//! [`ContentDocument`] only exists once the raw source has passed
//! [`crate::validate`], so rendering code reads fields directly with no
//! fallbacks. Serialization uses the same camelCase keys as the content file.

use serde::Serialize;

use crate::icons::{resolve_icon, Icon};

/// The validated, immutable aggregate of all page copy.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    pub site: Site,
    pub header: Header,
    pub hero: Hero,
    pub social_proof: SocialProof,
    pub services_section: ServicesSection,
    pub approach_section: ApproachSection,
    pub results_section: ResultsSection,
    pub testimonials_section: TestimonialsSection,
    pub pricing_section: PricingSection,
    pub faq_section: FaqSection,
    pub contact_section: ContactSection,
    pub footer: Footer,
}

/// An anchored section of the page, in editorial order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionAnchor<'a> {
    /// Document key of the section (e.g. `servicesSection`)
    pub key: &'static str,
    /// Anchor id used for in-page navigation (e.g. `services`)
    pub id: &'a str,
}

impl ContentDocument {
    /// Every anchored section, in the order the page renders them.
    pub fn section_anchors(&self) -> Vec<SectionAnchor<'_>> {
        vec![
            SectionAnchor { key: "servicesSection", id: &self.services_section.id },
            SectionAnchor { key: "approachSection", id: &self.approach_section.id },
            SectionAnchor { key: "resultsSection", id: &self.results_section.id },
            SectionAnchor { key: "testimonialsSection", id: &self.testimonials_section.id },
            SectionAnchor { key: "pricingSection", id: &self.pricing_section.id },
            SectionAnchor { key: "faqSection", id: &self.faq_section.id },
            SectionAnchor { key: "contactSection", id: &self.contact_section.id },
        ]
    }

    /// Whether `id` names one of the section anchors.
    pub fn has_anchor(&self, id: &str) -> bool {
        self.section_anchors().iter().any(|anchor| anchor.id == id)
    }
}

/// A label + destination pair used for navigation and calls-to-action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Link {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    /// The in-page anchor this link targets, if it is a `#fragment` link.
    ///
    /// A bare `#` is a placeholder and targets nothing.
    pub fn anchor(&self) -> Option<&str> {
        self.href.strip_prefix('#').filter(|fragment| !fragment.is_empty())
    }
}

// ============================================================================
// Site chrome
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Site {
    pub name: String,
    pub tagline: String,
    pub meta: SiteMeta,
}

/// Document `<title>` and meta description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteMeta {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub logo_text: String,
    pub primary_cta: Link,
    pub nav_links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub heading: String,
    pub subheading: String,
    pub primary_cta: Link,
    pub secondary_cta: Link,
    pub trust_bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialProof {
    pub metrics: Vec<Metric>,
    pub selected_clients_line: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub value: String,
    pub label: String,
}

// ============================================================================
// Sections
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServicesSection {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub items: Vec<ServiceItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItem {
    pub icon_id: String,
    pub title: String,
    pub description: String,
}

impl ServiceItem {
    pub fn icon(&self) -> Icon {
        resolve_icon(&self.icon_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApproachSection {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub steps: Vec<ApproachStep>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApproachStep {
    pub step: String,
    pub title: String,
    pub description: String,
    pub outcomes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsSection {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub case_studies: Vec<CaseStudy>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    /// Client type, e.g. "Seed-stage startup" (`type` in the content file)
    #[serde(rename = "type")]
    pub client_type: String,
    pub challenge: String,
    pub solution_heading: String,
    pub solution: String,
    pub result_heading: String,
    pub result: String,
    pub details: String,
    pub read_more_label: String,
    pub close_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestimonialsSection {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub items: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub role: String,
    pub company: String,
}

impl Testimonial {
    /// Avatar initials: the first letter of each word of the name.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingSection {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub tiers: Vec<PricingTier>,
    pub footnote: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingTier {
    pub name: String,
    pub price: String,
    pub price_suffix: String,
    pub description: String,
    pub features: Vec<String>,
    pub cta_label: String,
    pub cta_href: String,
    pub popular: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqSection {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub items: Vec<FaqItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

// ============================================================================
// Contact section and form copy
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSection {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub details: ContactDetails,
    pub form: FormContract,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactDetails {
    pub email: String,
    /// The only optional field in the document. Absent, `null` and `""` all
    /// mean "no phone number shown".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub location: String,
    pub hours: String,
}

/// Every label, placeholder and option list the contact form needs.
///
/// This is copy, not form values: the form reads it and never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormContract {
    pub success_title: String,
    pub success_body: String,
    pub toast_success: String,
    pub submit_idle_label: String,
    pub submit_loading_label: String,
    pub fields: FormFields,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFields {
    pub full_name: TextFieldCopy,
    pub organisation: TextFieldCopy,
    pub email: TextFieldCopy,
    pub phone: TextFieldCopy,
    pub engagement_type: SelectFieldCopy,
    pub budget_range: SelectFieldCopy,
    pub areas_of_interest: CheckboxGroupCopy,
    pub message: TextFieldCopy,
    pub consent: ConsentCopy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextFieldCopy {
    pub label: String,
    pub placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectFieldCopy {
    pub label: String,
    pub placeholder: String,
    pub options: Vec<SelectOption>,
}

impl SelectFieldCopy {
    /// Whether `value` is one of the enumerated option values.
    pub fn has_value(&self, value: &str) -> bool {
        self.options.iter().any(|option| option.value == value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckboxGroupCopy {
    pub label: String,
    pub options: Vec<CheckboxOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckboxOption {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsentCopy {
    pub label: String,
}

// ============================================================================
// Footer
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    pub brand_name: String,
    pub brand_blurb: String,
    pub columns: Vec<FooterColumn>,
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterColumn {
    pub title: String,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon_id: String,
}

impl SocialLink {
    pub fn icon(&self) -> Icon {
        resolve_icon(&self.icon_id)
    }
}
