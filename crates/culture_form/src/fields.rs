//! Contact form fields and the values a visitor has entered.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every field of the contact form, in the order it is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FullName,
    Organisation,
    Email,
    Phone,
    EngagementType,
    BudgetRange,
    AreasOfInterest,
    Message,
    Consent,
}

impl FieldName {
    pub const ALL: [FieldName; 9] = [
        FieldName::FullName,
        FieldName::Organisation,
        FieldName::Email,
        FieldName::Phone,
        FieldName::EngagementType,
        FieldName::BudgetRange,
        FieldName::AreasOfInterest,
        FieldName::Message,
        FieldName::Consent,
    ];

    /// Wire name, matching the submission payload and the content copy keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::FullName => "fullName",
            FieldName::Organisation => "organisation",
            FieldName::Email => "email",
            FieldName::Phone => "phone",
            FieldName::EngagementType => "engagementType",
            FieldName::BudgetRange => "budgetRange",
            FieldName::AreasOfInterest => "areasOfInterest",
            FieldName::Message => "message",
            FieldName::Consent => "consent",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Free-text inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    FullName,
    Organisation,
    Email,
    Phone,
    Message,
}

impl TextField {
    pub fn field(&self) -> FieldName {
        match self {
            TextField::FullName => FieldName::FullName,
            TextField::Organisation => FieldName::Organisation,
            TextField::Email => FieldName::Email,
            TextField::Phone => FieldName::Phone,
            TextField::Message => FieldName::Message,
        }
    }
}

/// Single-choice selects whose options come from the content document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectField {
    EngagementType,
    BudgetRange,
}

impl SelectField {
    pub fn field(&self) -> FieldName {
        match self {
            SelectField::EngagementType => FieldName::EngagementType,
            SelectField::BudgetRange => FieldName::BudgetRange,
        }
    }
}

/// What the visitor has typed, picked and ticked.
///
/// The default is the blank form the page starts with and returns to after a
/// successful enquiry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactFormValues {
    pub full_name: String,
    pub organisation: String,
    pub email: String,
    /// Free text; `""` means no phone number given
    pub phone: String,
    pub engagement_type: String,
    pub budget_range: String,
    /// Selected option ids in the order they were ticked
    pub areas_of_interest: Vec<String>,
    pub message: String,
    pub consent: bool,
}

impl ContactFormValues {
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::FullName => &self.full_name,
            TextField::Organisation => &self.organisation,
            TextField::Email => &self.email,
            TextField::Phone => &self.phone,
            TextField::Message => &self.message,
        }
    }

    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        let slot = match field {
            TextField::FullName => &mut self.full_name,
            TextField::Organisation => &mut self.organisation,
            TextField::Email => &mut self.email,
            TextField::Phone => &mut self.phone,
            TextField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn select(&self, field: SelectField) -> &str {
        match field {
            SelectField::EngagementType => &self.engagement_type,
            SelectField::BudgetRange => &self.budget_range,
        }
    }

    pub fn set_select(&mut self, field: SelectField, value: impl Into<String>) {
        let slot = match field {
            SelectField::EngagementType => &mut self.engagement_type,
            SelectField::BudgetRange => &mut self.budget_range,
        };
        *slot = value.into();
    }

    /// Tick `id` if unticked, untick it if ticked.
    ///
    /// New selections are appended; removing one leaves the others in place.
    /// Toggling twice restores the original list.
    pub fn toggle_area(&mut self, id: &str) {
        match self.areas_of_interest.iter().position(|area| area == id) {
            Some(index) => {
                self.areas_of_interest.remove(index);
            }
            None => self.areas_of_interest.push(id.to_string()),
        }
    }

    pub fn is_area_selected(&self, id: &str) -> bool {
        self.areas_of_interest.iter().any(|area| area == id)
    }

    /// The payload handed to a [`crate::SubmissionHandler`].
    pub fn to_submission(&self) -> ContactSubmission {
        ContactSubmission {
            full_name: self.full_name.clone(),
            organisation: self.organisation.clone(),
            email: self.email.clone(),
            phone: Some(self.phone.clone()).filter(|phone| !phone.is_empty()),
            engagement_type: self.engagement_type.clone(),
            areas_of_interest: self.areas_of_interest.clone(),
            budget_range: self.budget_range.clone(),
            message: self.message.clone(),
            consent: self.consent,
        }
    }
}

/// A validated enquiry, as sent to the submission handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub full_name: String,
    pub organisation: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub engagement_type: String,
    pub areas_of_interest: Vec<String>,
    pub budget_range: String,
    pub message: String,
    pub consent: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_area_twice_is_identity() {
        let mut values = ContactFormValues::default();
        values.toggle_area("culture-strategy");
        values.toggle_area("measurement");
        let before = values.areas_of_interest.clone();

        values.toggle_area("onboarding");
        values.toggle_area("onboarding");
        assert_eq!(values.areas_of_interest, before);

        values.toggle_area("culture-strategy");
        values.toggle_area("culture-strategy");
        assert_eq!(
            values.areas_of_interest,
            vec!["measurement".to_string(), "culture-strategy".to_string()]
        );
    }

    #[test]
    fn test_toggle_area_never_duplicates_or_reorders() {
        let mut values = ContactFormValues::default();
        for id in ["a", "b", "c"] {
            values.toggle_area(id);
        }
        values.toggle_area("b");
        assert_eq!(values.areas_of_interest, vec!["a".to_string(), "c".to_string()]);
        assert!(!values.is_area_selected("b"));
        assert!(values.is_area_selected("c"));
    }

    #[test]
    fn test_submission_drops_blank_phone() {
        let mut values = ContactFormValues::default();
        values.set_text(TextField::FullName, "Jo Lee");
        let submission = values.to_submission();
        assert_eq!(submission.phone, None);
        assert_eq!(submission.full_name, "Jo Lee");

        values.set_text(TextField::Phone, "+44 20 7946 0000");
        assert_eq!(values.to_submission().phone.as_deref(), Some("+44 20 7946 0000"));
    }

    #[test]
    fn test_submission_wire_names() {
        let mut values = ContactFormValues::default();
        values.set_select(SelectField::EngagementType, "sprint");
        let json = serde_json::to_value(values.to_submission()).unwrap();
        assert_eq!(json["engagementType"], "sprint");
        assert!(json.get("phone").is_none());
        assert_eq!(json["areasOfInterest"], serde_json::json!([]));
    }

    #[test]
    fn test_values_deserialize_partial() {
        let values: ContactFormValues =
            serde_json::from_str(r#"{ "fullName": "Jo Lee", "consent": true }"#).unwrap();
        assert_eq!(values.full_name, "Jo Lee");
        assert!(values.consent);
        assert!(values.email.is_empty());
    }
}
