//! End-to-end checks of the content contract against the shipped document.

use culture_content::{
    load_content, resolve_icon, validate, ContentLoadError, Icon, IconRenderer, ClassIconRenderer,
    ViolationKind,
};
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn home_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../content/home.json")
}

fn home() -> Value {
    serde_json::from_str(&fs::read_to_string(home_path()).unwrap()).unwrap()
}

#[test]
fn lists_keep_source_order() {
    let doc = validate(&home()).unwrap();

    let nav: Vec<&str> = doc.header.nav_links.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(
        nav,
        vec!["Services", "Approach", "Results", "Testimonials", "Pricing", "FAQ", "Contact"]
    );

    let tiers: Vec<&str> = doc.pricing_section.tiers.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(tiers.len(), 3);
    assert_eq!(tiers[1], "Sprint");

    let anchors: Vec<&str> = doc.section_anchors().iter().map(|a| a.id).collect();
    assert_eq!(
        anchors,
        vec!["services", "approach", "results", "testimonials", "pricing", "faq", "contact"]
    );
}

#[test]
fn reordered_source_is_reordered_document() {
    let mut raw = home();
    let items = raw["faqSection"]["items"].as_array_mut().unwrap();
    items.reverse();
    let expected: Vec<String> = items
        .iter()
        .map(|item| item["question"].as_str().unwrap().to_string())
        .collect();

    let doc = validate(&raw).unwrap();
    let got: Vec<String> = doc.faq_section.items.iter().map(|i| i.question.clone()).collect();
    assert_eq!(got, expected);
}

#[test]
fn every_violation_is_reported_in_one_pass() {
    let mut raw = home();
    raw["pricingSection"]["tiers"][1]
        .as_object_mut()
        .unwrap()
        .remove("popular");
    raw["site"]["meta"]["title"] = json!(7);
    raw.as_object_mut().unwrap().remove("footer");

    let err = validate(&raw).unwrap_err();
    assert!(err.has_path("pricingSection.tiers[1].popular"));
    assert!(err.has_path("site.meta.title"));
    assert!(err.has_path("footer"));
    assert!(!err.has_path("footer.brandName"));
    assert_eq!(err.violations.len(), 3);

    let popular = err
        .violations
        .iter()
        .find(|v| v.path.to_string() == "pricingSection.tiers[1].popular")
        .unwrap();
    assert_eq!(popular.kind, ViolationKind::Missing);
    assert_eq!(popular.expected, "boolean");
}

#[test]
fn popular_must_be_a_boolean() {
    let mut raw = home();
    raw["pricingSection"]["tiers"][0]["popular"] = json!("yes");
    let err = validate(&raw).unwrap_err();
    assert_eq!(err.paths(), vec!["pricingSection.tiers[0].popular".to_string()]);
    assert_eq!(err.violations[0].kind, ViolationKind::TypeMismatch);
    assert_eq!(err.violations[0].got, "string");
}

#[test]
fn unknown_icon_renders_as_fallback() {
    let mut raw = home();
    raw["servicesSection"]["items"][0]["iconId"] = json!("rocket");
    let doc = validate(&raw).unwrap();

    let item = &doc.services_section.items[0];
    assert_eq!(item.icon(), Icon::Fallback);
    assert_eq!(resolve_icon("rocket"), Icon::Fallback);

    let html = ClassIconRenderer.render(item.icon());
    assert!(html.contains("icon-circle-help"));

    let social = &doc.footer.social_links[0];
    assert_eq!(social.icon(), Icon::Linkedin);
}

#[test]
fn exactly_one_popular_tier() {
    let mut raw = home();
    let tiers = raw["pricingSection"]["tiers"].as_array_mut().unwrap();
    tiers.truncate(2);
    tiers[0]["popular"] = json!(false);
    tiers[1]["popular"] = json!(true);

    let doc = validate(&raw).unwrap();
    let flags: Vec<bool> = doc.pricing_section.tiers.iter().map(|t| t.popular).collect();
    assert_eq!(flags, vec![false, true]);
}

#[test]
fn load_from_disk_reports_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("home.json");

    let mut raw = home();
    raw["contactSection"]["form"]["fields"]["consent"]
        .as_object_mut()
        .unwrap()
        .remove("label");
    fs::write(&path, serde_json::to_string_pretty(&raw).unwrap()).unwrap();

    let err = load_content(&path).unwrap_err();
    assert!(matches!(err, ContentLoadError::Invalid { .. }));
    assert!(err.to_string().contains("home.json"));
    let validation = err.validation().unwrap();
    assert_eq!(
        validation.paths(),
        vec!["contactSection.form.fields.consent.label".to_string()]
    );
}

#[test]
fn load_shipped_document() {
    let doc = load_content(&home_path()).unwrap();
    assert_eq!(doc.contact_section.form.fields.budget_range.options.len(), 5);
    assert_eq!(doc.contact_section.form.fields.areas_of_interest.options.len(), 6);
}
