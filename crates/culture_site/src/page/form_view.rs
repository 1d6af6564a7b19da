//! Contact form markup.

use culture_content::{FormContract, SelectFieldCopy, TextFieldCopy};
use culture_form::{
    ContactForm, ContactFormValues, FieldError, FieldName, Notice, NoticeKind, SubmissionHandler,
    SubmissionPhase,
};

use super::html::Html;

/// What the form looks like at one moment, detached from the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormView {
    pub values: ContactFormValues,
    pub errors: Vec<FieldError>,
    pub phase: SubmissionPhase,
    pub notice: Option<Notice>,
}

impl FormView {
    pub fn of<H: SubmissionHandler>(form: &ContactForm<H>) -> Self {
        Self {
            values: form.values().clone(),
            errors: form.errors().into_iter().cloned().collect(),
            phase: form.phase(),
            notice: form.notice().cloned(),
        }
    }

    fn error(&self, field: FieldName) -> Option<&FieldError> {
        self.errors.iter().find(|error| error.field == field)
    }
}

pub(crate) fn render_form(html: &mut Html, copy: &FormContract, view: &FormView) {
    if let Some(notice) = &view.notice {
        let class = match notice.kind {
            NoticeKind::Success => "toast toast-success",
            NoticeKind::Error => "toast toast-error",
        };
        html.element("div", &[("class", class), ("role", "status")], &notice.message);
    }

    if view.phase == SubmissionPhase::Succeeded {
        html.open("div", &[("class", "form-success")]);
        html.element("h3", &[], &copy.success_title);
        html.element("p", &[], &copy.success_body);
        html.close("div");
        return;
    }

    let fields = &copy.fields;
    let values = &view.values;
    html.open("form", &[("class", "contact-form"), ("novalidate", "")]);

    text_input(html, view, FieldName::FullName, &fields.full_name, "text", &values.full_name);
    text_input(html, view, FieldName::Organisation, &fields.organisation, "text", &values.organisation);
    text_input(html, view, FieldName::Email, &fields.email, "email", &values.email);
    text_input(html, view, FieldName::Phone, &fields.phone, "tel", &values.phone);
    select(html, view, FieldName::EngagementType, &fields.engagement_type, &values.engagement_type);
    select(html, view, FieldName::BudgetRange, &fields.budget_range, &values.budget_range);

    html.open("fieldset", &[("class", "field")]);
    html.element("legend", &[], &fields.areas_of_interest.label);
    for option in &fields.areas_of_interest.options {
        let id = format!("area-{}", option.id);
        html.open("label", &[("for", id.as_str())]);
        if values.is_area_selected(&option.id) {
            html.void(
                "input",
                &[("type", "checkbox"), ("id", id.as_str()), ("name", "areasOfInterest"), ("value", option.id.as_str()), ("checked", "")],
            );
        } else {
            html.void(
                "input",
                &[("type", "checkbox"), ("id", id.as_str()), ("name", "areasOfInterest"), ("value", option.id.as_str())],
            );
        }
        html.text(&option.label).close("label");
    }
    html.close("fieldset");

    html.open("div", &[("class", "field")]);
    html.element("label", &[("for", "message")], &fields.message.label);
    html.open(
        "textarea",
        &[("id", "message"), ("name", "message"), ("placeholder", fields.message.placeholder.as_str())],
    );
    html.text(&values.message).close("textarea");
    field_error(html, view, FieldName::Message);
    html.close("div");

    html.open("div", &[("class", "field field-consent")]);
    html.open("label", &[("for", "consent")]);
    if values.consent {
        html.void("input", &[("type", "checkbox"), ("id", "consent"), ("name", "consent"), ("checked", "")]);
    } else {
        html.void("input", &[("type", "checkbox"), ("id", "consent"), ("name", "consent")]);
    }
    html.text(&fields.consent.label).close("label");
    field_error(html, view, FieldName::Consent);
    html.close("div");

    if view.phase == SubmissionPhase::Submitting {
        html.element(
            "button",
            &[("type", "submit"), ("disabled", ""), ("aria-busy", "true")],
            &copy.submit_loading_label,
        );
    } else {
        html.element("button", &[("type", "submit")], &copy.submit_idle_label);
    }
    html.close("form");
}

fn text_input(
    html: &mut Html,
    view: &FormView,
    field: FieldName,
    copy: &TextFieldCopy,
    input_type: &str,
    value: &str,
) {
    let name = field.as_str();
    html.open("div", &[("class", "field")]);
    html.element("label", &[("for", name)], &copy.label);
    html.void(
        "input",
        &[("type", input_type), ("id", name), ("name", name), ("placeholder", copy.placeholder.as_str()), ("value", value)],
    );
    field_error(html, view, field);
    html.close("div");
}

fn select(html: &mut Html, view: &FormView, field: FieldName, copy: &SelectFieldCopy, value: &str) {
    let name = field.as_str();
    html.open("div", &[("class", "field")]);
    html.element("label", &[("for", name)], &copy.label);
    html.open("select", &[("id", name), ("name", name)]);
    html.element("option", &[("value", "")], &copy.placeholder);
    for option in &copy.options {
        if option.value == value {
            html.element("option", &[("value", option.value.as_str()), ("selected", "")], &option.label);
        } else {
            html.element("option", &[("value", option.value.as_str())], &option.label);
        }
    }
    html.close("select");
    field_error(html, view, field);
    html.close("div");
}

fn field_error(html: &mut Html, view: &FormView, field: FieldName) {
    if let Some(error) = view.error(field) {
        let id = format!("{}-error", field.as_str());
        html.element("p", &[("class", "field-error"), ("id", id.as_str())], &error.message);
    }
}
