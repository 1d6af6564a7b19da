//! Content Validation
//!
//! One explicit pass over the raw JSON that either yields a complete
//! [`ContentDocument`] or every violation found. The walk keeps going after
//! a failure so editors see all problems at once; the partially built
//! document is discarded whenever a violation was recorded.
//!
//! A missing or mistyped parent is reported once. Its children are not
//! reported again.

use serde_json::{Map, Value};

use crate::model::*;
use crate::violation::{ContentValidationError, ContentViolation, FieldPath};

/// Validate a raw content document.
pub fn validate(raw: &Value) -> Result<ContentDocument, ContentValidationError> {
    let mut walker = Walker::default();
    let root = walker.root(raw);
    let document = read_document(&mut walker, &root);

    if root.map.is_some() {
        check_section_anchors(&mut walker, &root, &document);
    }

    if walker.violations.is_empty() {
        Ok(document)
    } else {
        Err(ContentValidationError::new(walker.violations))
    }
}

/// Parse JSON text and validate it.
///
/// Malformed JSON is reported as a single violation at the root.
pub fn validate_str(source: &str) -> Result<ContentDocument, ContentValidationError> {
    let raw: Value = serde_json::from_str(source).map_err(|err| {
        ContentValidationError::new(vec![ContentViolation::type_mismatch(
            FieldPath::root(),
            "JSON object",
            format!("unparseable JSON ({})", err),
        )])
    })?;
    validate(&raw)
}

// ============================================================================
// Walker
// ============================================================================

/// A JSON object being read, with its path. `map` is `None` when the object
/// itself was missing or mistyped (already reported).
struct Obj<'v> {
    map: Option<&'v Map<String, Value>>,
    path: FieldPath,
}

impl<'v> Obj<'v> {
    fn absent(path: FieldPath) -> Self {
        Self { map: None, path }
    }
}

#[derive(Default)]
struct Walker {
    violations: Vec<ContentViolation>,
}

impl Walker {
    fn root<'v>(&mut self, raw: &'v Value) -> Obj<'v> {
        let path = FieldPath::root();
        match raw {
            Value::Object(map) => Obj { map: Some(map), path },
            other => {
                self.violations.push(ContentViolation::type_mismatch(
                    path.clone(),
                    "object",
                    json_type_name(other),
                ));
                Obj::absent(path)
            }
        }
    }

    /// Look up a required field. `null` counts as missing.
    fn field<'v>(&mut self, obj: &Obj<'v>, key: &str, expected: &str) -> Option<&'v Value> {
        let map = obj.map?;
        match map.get(key) {
            Some(Value::Null) | None => {
                self.violations
                    .push(ContentViolation::missing(obj.path.key(key), expected));
                None
            }
            Some(value) => Some(value),
        }
    }

    fn mismatch(&mut self, path: FieldPath, expected: &str, got: &Value) {
        self.violations
            .push(ContentViolation::type_mismatch(path, expected, json_type_name(got)));
    }

    fn string(&mut self, obj: &Obj<'_>, key: &str) -> String {
        match self.field(obj, key, "string") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => {
                self.mismatch(obj.path.key(key), "string", other);
                String::new()
            }
            None => String::new(),
        }
    }

    /// An optional string: absent, `null` and `""` all read as `None`.
    fn optional_string(&mut self, obj: &Obj<'_>, key: &str) -> Option<String> {
        let map = obj.map?;
        match map.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.is_empty() => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                self.mismatch(obj.path.key(key), "string", other);
                None
            }
        }
    }

    fn boolean(&mut self, obj: &Obj<'_>, key: &str) -> bool {
        match self.field(obj, key, "boolean") {
            Some(Value::Bool(b)) => *b,
            Some(other) => {
                self.mismatch(obj.path.key(key), "boolean", other);
                false
            }
            None => false,
        }
    }

    fn object<'v>(&mut self, obj: &Obj<'v>, key: &str) -> Obj<'v> {
        let path = obj.path.key(key);
        match self.field(obj, key, "object") {
            Some(Value::Object(map)) => Obj { map: Some(map), path },
            Some(other) => {
                self.mismatch(path.clone(), "object", other);
                Obj::absent(path)
            }
            None => Obj::absent(path),
        }
    }

    fn array<'v>(&mut self, obj: &Obj<'v>, key: &str) -> Option<&'v Vec<Value>> {
        match self.field(obj, key, "array")? {
            Value::Array(items) => Some(items),
            other => {
                self.mismatch(obj.path.key(key), "array", other);
                None
            }
        }
    }

    /// A list of objects, read in source order.
    fn list<'v, T>(
        &mut self,
        obj: &Obj<'v>,
        key: &str,
        mut read_item: impl FnMut(&mut Self, &Obj<'v>) -> T,
    ) -> Vec<T> {
        let Some(items) = self.array(obj, key) else {
            return Vec::new();
        };
        let list_path = obj.path.key(key);
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let path = list_path.index(index);
                let item_obj = match item {
                    Value::Object(map) => Obj { map: Some(map), path },
                    other => {
                        self.mismatch(path.clone(), "object", other);
                        Obj::absent(path)
                    }
                };
                read_item(self, &item_obj)
            })
            .collect()
    }

    fn string_list(&mut self, obj: &Obj<'_>, key: &str) -> Vec<String> {
        let Some(items) = self.array(obj, key) else {
            return Vec::new();
        };
        let list_path = obj.path.key(key);
        items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| match item {
                Value::String(s) => Some(s.clone()),
                other => {
                    self.mismatch(list_path.index(index), "string", other);
                    None
                }
            })
            .collect()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// Document readers
// ============================================================================

fn read_document(w: &mut Walker, root: &Obj<'_>) -> ContentDocument {
    let site = w.object(root, "site");
    let header = w.object(root, "header");
    let hero = w.object(root, "hero");
    let social_proof = w.object(root, "socialProof");
    let services = w.object(root, "servicesSection");
    let approach = w.object(root, "approachSection");
    let results = w.object(root, "resultsSection");
    let testimonials = w.object(root, "testimonialsSection");
    let pricing = w.object(root, "pricingSection");
    let faq = w.object(root, "faqSection");
    let contact = w.object(root, "contactSection");
    let footer = w.object(root, "footer");

    ContentDocument {
        site: read_site(w, &site),
        header: read_header(w, &header),
        hero: read_hero(w, &hero),
        social_proof: read_social_proof(w, &social_proof),
        services_section: read_services(w, &services),
        approach_section: read_approach(w, &approach),
        results_section: read_results(w, &results),
        testimonials_section: read_testimonials(w, &testimonials),
        pricing_section: read_pricing(w, &pricing),
        faq_section: read_faq(w, &faq),
        contact_section: read_contact(w, &contact),
        footer: read_footer(w, &footer),
    }
}

fn read_link(w: &mut Walker, obj: &Obj<'_>) -> Link {
    Link {
        label: w.string(obj, "label"),
        href: w.string(obj, "href"),
    }
}

fn read_site(w: &mut Walker, obj: &Obj<'_>) -> Site {
    let name = w.string(obj, "name");
    let tagline = w.string(obj, "tagline");
    let meta = w.object(obj, "meta");
    Site {
        name,
        tagline,
        meta: SiteMeta {
            title: w.string(&meta, "title"),
            description: w.string(&meta, "description"),
        },
    }
}

fn read_header(w: &mut Walker, obj: &Obj<'_>) -> Header {
    let logo_text = w.string(obj, "logoText");
    let primary_cta = w.object(obj, "primaryCta");
    let primary_cta = read_link(w, &primary_cta);
    Header {
        logo_text,
        primary_cta,
        nav_links: w.list(obj, "navLinks", read_link),
    }
}

fn read_hero(w: &mut Walker, obj: &Obj<'_>) -> Hero {
    let heading = w.string(obj, "heading");
    let subheading = w.string(obj, "subheading");
    let primary_cta = w.object(obj, "primaryCta");
    let primary_cta = read_link(w, &primary_cta);
    let secondary_cta = w.object(obj, "secondaryCta");
    let secondary_cta = read_link(w, &secondary_cta);
    Hero {
        heading,
        subheading,
        primary_cta,
        secondary_cta,
        trust_bullets: w.string_list(obj, "trustBullets"),
    }
}

fn read_social_proof(w: &mut Walker, obj: &Obj<'_>) -> SocialProof {
    let metrics = w.list(obj, "metrics", |w, item| Metric {
        value: w.string(item, "value"),
        label: w.string(item, "label"),
    });
    SocialProof {
        metrics,
        selected_clients_line: w.string(obj, "selectedClientsLine"),
    }
}

fn read_services(w: &mut Walker, obj: &Obj<'_>) -> ServicesSection {
    ServicesSection {
        id: w.string(obj, "id"),
        title: w.string(obj, "title"),
        subtitle: w.string(obj, "subtitle"),
        items: w.list(obj, "items", |w, item| ServiceItem {
            icon_id: w.string(item, "iconId"),
            title: w.string(item, "title"),
            description: w.string(item, "description"),
        }),
    }
}

fn read_approach(w: &mut Walker, obj: &Obj<'_>) -> ApproachSection {
    ApproachSection {
        id: w.string(obj, "id"),
        title: w.string(obj, "title"),
        subtitle: w.string(obj, "subtitle"),
        steps: w.list(obj, "steps", |w, item| ApproachStep {
            step: w.string(item, "step"),
            title: w.string(item, "title"),
            description: w.string(item, "description"),
            outcomes: w.string_list(item, "outcomes"),
        }),
    }
}

fn read_results(w: &mut Walker, obj: &Obj<'_>) -> ResultsSection {
    ResultsSection {
        id: w.string(obj, "id"),
        title: w.string(obj, "title"),
        subtitle: w.string(obj, "subtitle"),
        case_studies: w.list(obj, "caseStudies", |w, item| CaseStudy {
            client_type: w.string(item, "type"),
            challenge: w.string(item, "challenge"),
            solution_heading: w.string(item, "solutionHeading"),
            solution: w.string(item, "solution"),
            result_heading: w.string(item, "resultHeading"),
            result: w.string(item, "result"),
            details: w.string(item, "details"),
            read_more_label: w.string(item, "readMoreLabel"),
            close_label: w.string(item, "closeLabel"),
        }),
    }
}

fn read_testimonials(w: &mut Walker, obj: &Obj<'_>) -> TestimonialsSection {
    TestimonialsSection {
        id: w.string(obj, "id"),
        title: w.string(obj, "title"),
        subtitle: w.string(obj, "subtitle"),
        items: w.list(obj, "items", |w, item| Testimonial {
            quote: w.string(item, "quote"),
            name: w.string(item, "name"),
            role: w.string(item, "role"),
            company: w.string(item, "company"),
        }),
    }
}

fn read_pricing(w: &mut Walker, obj: &Obj<'_>) -> PricingSection {
    PricingSection {
        id: w.string(obj, "id"),
        title: w.string(obj, "title"),
        subtitle: w.string(obj, "subtitle"),
        tiers: w.list(obj, "tiers", |w, item| PricingTier {
            name: w.string(item, "name"),
            price: w.string(item, "price"),
            price_suffix: w.string(item, "priceSuffix"),
            description: w.string(item, "description"),
            features: w.string_list(item, "features"),
            cta_label: w.string(item, "ctaLabel"),
            cta_href: w.string(item, "ctaHref"),
            popular: w.boolean(item, "popular"),
        }),
        footnote: w.string(obj, "footnote"),
    }
}

fn read_faq(w: &mut Walker, obj: &Obj<'_>) -> FaqSection {
    FaqSection {
        id: w.string(obj, "id"),
        title: w.string(obj, "title"),
        subtitle: w.string(obj, "subtitle"),
        items: w.list(obj, "items", |w, item| FaqItem {
            question: w.string(item, "question"),
            answer: w.string(item, "answer"),
        }),
    }
}

fn read_contact(w: &mut Walker, obj: &Obj<'_>) -> ContactSection {
    let id = w.string(obj, "id");
    let title = w.string(obj, "title");
    let subtitle = w.string(obj, "subtitle");

    let details = w.object(obj, "details");
    let details = ContactDetails {
        email: w.string(&details, "email"),
        phone: w.optional_string(&details, "phone"),
        location: w.string(&details, "location"),
        hours: w.string(&details, "hours"),
    };

    let form = w.object(obj, "form");
    ContactSection {
        id,
        title,
        subtitle,
        details,
        form: read_form_contract(w, &form),
    }
}

fn read_form_contract(w: &mut Walker, obj: &Obj<'_>) -> FormContract {
    let success_title = w.string(obj, "successTitle");
    let success_body = w.string(obj, "successBody");
    let toast_success = w.string(obj, "toastSuccess");
    let submit_idle_label = w.string(obj, "submitIdleLabel");
    let submit_loading_label = w.string(obj, "submitLoadingLabel");

    let fields = w.object(obj, "fields");
    let full_name = w.object(&fields, "fullName");
    let organisation = w.object(&fields, "organisation");
    let email = w.object(&fields, "email");
    let phone = w.object(&fields, "phone");
    let engagement_type = w.object(&fields, "engagementType");
    let budget_range = w.object(&fields, "budgetRange");
    let areas_of_interest = w.object(&fields, "areasOfInterest");
    let message = w.object(&fields, "message");
    let consent = w.object(&fields, "consent");

    let fields = FormFields {
        full_name: read_text_copy(w, &full_name),
        organisation: read_text_copy(w, &organisation),
        email: read_text_copy(w, &email),
        phone: read_text_copy(w, &phone),
        engagement_type: read_select_copy(w, &engagement_type),
        budget_range: read_select_copy(w, &budget_range),
        areas_of_interest: read_checkbox_copy(w, &areas_of_interest),
        message: read_text_copy(w, &message),
        consent: ConsentCopy {
            label: w.string(&consent, "label"),
        },
    };

    FormContract {
        success_title,
        success_body,
        toast_success,
        submit_idle_label,
        submit_loading_label,
        fields,
    }
}

fn read_text_copy(w: &mut Walker, obj: &Obj<'_>) -> TextFieldCopy {
    TextFieldCopy {
        label: w.string(obj, "label"),
        placeholder: w.string(obj, "placeholder"),
    }
}

fn read_select_copy(w: &mut Walker, obj: &Obj<'_>) -> SelectFieldCopy {
    SelectFieldCopy {
        label: w.string(obj, "label"),
        placeholder: w.string(obj, "placeholder"),
        options: w.list(obj, "options", |w, item| SelectOption {
            value: w.string(item, "value"),
            label: w.string(item, "label"),
        }),
    }
}

fn read_checkbox_copy(w: &mut Walker, obj: &Obj<'_>) -> CheckboxGroupCopy {
    CheckboxGroupCopy {
        label: w.string(obj, "label"),
        options: w.list(obj, "options", |w, item| CheckboxOption {
            id: w.string(item, "id"),
            label: w.string(item, "label"),
        }),
    }
}

fn read_footer(w: &mut Walker, obj: &Obj<'_>) -> Footer {
    let brand_name = w.string(obj, "brandName");
    let brand_blurb = w.string(obj, "brandBlurb");
    let columns = w.list(obj, "columns", |w, item| FooterColumn {
        title: w.string(item, "title"),
        links: w.list(item, "links", read_link),
    });
    Footer {
        brand_name,
        brand_blurb,
        columns,
        social_links: w.list(obj, "socialLinks", |w, item| SocialLink {
            label: w.string(item, "label"),
            href: w.string(item, "href"),
            icon_id: w.string(item, "iconId"),
        }),
    }
}

// ============================================================================
// Cross-field checks
// ============================================================================

/// Section ids must be non-empty and unique. Sections that were themselves
/// missing are skipped (already reported).
fn check_section_anchors(w: &mut Walker, root: &Obj<'_>, document: &ContentDocument) {
    let Some(root_map) = root.map else {
        return;
    };

    let mut seen: Vec<(&str, FieldPath)> = Vec::new();
    for anchor in document.section_anchors() {
        let section_present = matches!(root_map.get(anchor.key), Some(Value::Object(section))
            if matches!(section.get("id"), Some(Value::String(_))));
        if !section_present {
            continue;
        }

        let path = root.path.key(anchor.key).key("id");
        if anchor.id.is_empty() {
            w.violations.push(ContentViolation::empty_anchor(path));
            continue;
        }

        match seen.iter().find(|(id, _)| *id == anchor.id) {
            Some((_, first_use)) => {
                w.violations
                    .push(ContentViolation::duplicate_anchor(path, anchor.id, first_use));
            }
            None => seen.push((anchor.id, path)),
        }
    }
}
