//! Field Validation Rules
//!
//! Each field has an ordered list of rules; the first one that fails supplies
//! the message shown under the field. Lengths count characters, untrimmed.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

use culture_content::FormFields;

use crate::fields::{ContactFormValues, FieldName};

pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
pub const ORGANISATION_REQUIRED: &str = "Organisation name is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const ENGAGEMENT_REQUIRED: &str = "Please select an engagement type";
pub const ENGAGEMENT_UNKNOWN: &str = "Please select one of the listed engagement types";
pub const BUDGET_REQUIRED: &str = "Please select a budget range";
pub const BUDGET_UNKNOWN: &str = "Please select one of the listed budget ranges";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters";
pub const CONSENT_REQUIRED: &str = "You must agree to be contacted";

// Lookarounds are not supported by `regex`; leading dots and ".." are
// rejected separately in `is_valid_email`.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$").unwrap()
});

/// The rule a field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// At least this many characters
    MinLength(usize),
    /// Email address syntax
    Email,
    /// A choice must be made
    Required,
    /// The choice must be one of the option values in the content
    OneOf,
    /// Box must be ticked
    MustAccept,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::MinLength(min) => write!(f, "min_length({})", min),
            Rule::Email => write!(f, "email"),
            Rule::Required => write!(f, "required"),
            Rule::OneOf => write!(f, "one_of"),
            Rule::MustAccept => write!(f, "must_accept"),
        }
    }
}

/// A field that failed validation, shown inline next to the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: FieldName,
    pub rule: Rule,
    pub message: String,
}

impl FieldError {
    fn new(field: FieldName, rule: Rule, message: &str) -> Self {
        Self {
            field,
            rule,
            message: message.to_string(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_PATTERN.is_match(email)
}

fn min_chars(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

/// Run the rules of one field. `copy` supplies the option lists.
pub fn check_field(
    field: FieldName,
    values: &ContactFormValues,
    copy: &FormFields,
) -> Option<FieldError> {
    match field {
        FieldName::FullName if !min_chars(&values.full_name, 2) => {
            Some(FieldError::new(field, Rule::MinLength(2), NAME_TOO_SHORT))
        }
        FieldName::Organisation if !min_chars(&values.organisation, 2) => {
            Some(FieldError::new(field, Rule::MinLength(2), ORGANISATION_REQUIRED))
        }
        FieldName::Email if !is_valid_email(&values.email) => {
            Some(FieldError::new(field, Rule::Email, EMAIL_INVALID))
        }
        FieldName::EngagementType => check_choice(
            field,
            &values.engagement_type,
            copy.engagement_type.has_value(&values.engagement_type),
            ENGAGEMENT_REQUIRED,
            ENGAGEMENT_UNKNOWN,
        ),
        FieldName::BudgetRange => check_choice(
            field,
            &values.budget_range,
            copy.budget_range.has_value(&values.budget_range),
            BUDGET_REQUIRED,
            BUDGET_UNKNOWN,
        ),
        FieldName::Message if !min_chars(&values.message, 10) => {
            Some(FieldError::new(field, Rule::MinLength(10), MESSAGE_TOO_SHORT))
        }
        FieldName::Consent if !values.consent => {
            Some(FieldError::new(field, Rule::MustAccept, CONSENT_REQUIRED))
        }
        _ => None,
    }
}

fn check_choice(
    field: FieldName,
    value: &str,
    listed: bool,
    required: &str,
    unknown: &str,
) -> Option<FieldError> {
    if value.is_empty() {
        Some(FieldError::new(field, Rule::Required, required))
    } else if !listed {
        Some(FieldError::new(field, Rule::OneOf, unknown))
    } else {
        None
    }
}

/// Run every field's rules; one error per invalid field, in layout order.
pub fn check_all(values: &ContactFormValues, copy: &FormFields) -> Vec<FieldError> {
    FieldName::ALL
        .iter()
        .filter_map(|field| check_field(*field, values, copy))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{copy, valid_values};

    #[test]
    fn test_valid_values_pass() {
        assert!(check_all(&valid_values(), &copy()).is_empty());
    }

    #[test]
    fn test_blank_form_fails_every_required_field() {
        let errors = check_all(&ContactFormValues::default(), &copy());
        let fields: Vec<FieldName> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                FieldName::FullName,
                FieldName::Organisation,
                FieldName::Email,
                FieldName::EngagementType,
                FieldName::BudgetRange,
                FieldName::Message,
                FieldName::Consent,
            ]
        );
    }

    #[test]
    fn test_length_counts_characters() {
        let mut values = valid_values();
        values.full_name = "Zoë".to_string();
        assert!(check_field(FieldName::FullName, &values, &copy()).is_none());

        values.full_name = "J".to_string();
        let err = check_field(FieldName::FullName, &values, &copy()).unwrap();
        assert_eq!(err.message, NAME_TOO_SHORT);
        assert_eq!(err.rule, Rule::MinLength(2));

        // untrimmed
        values.full_name = "  ".to_string();
        assert!(check_field(FieldName::FullName, &values, &copy()).is_none());

        values.message = "123456789".to_string();
        let err = check_field(FieldName::Message, &values, &copy()).unwrap();
        assert_eq!(err.message, MESSAGE_TOO_SHORT);
    }

    #[test]
    fn test_email_syntax() {
        for good in ["jo@acme.io", "jo.lee+site@mail.acme.co.uk", "o'neil@example.com"] {
            assert!(is_valid_email(good), "{}", good);
        }
        for bad in ["", "jo", "jo@", "@acme.io", "jo@acme", "jo@acme.c", ".jo@acme.io", "jo..lee@acme.io", "jo lee@acme.io"] {
            assert!(!is_valid_email(bad), "{}", bad);
        }
    }

    #[test]
    fn test_select_must_be_listed() {
        let mut values = valid_values();
        values.engagement_type = String::new();
        let err = check_field(FieldName::EngagementType, &values, &copy()).unwrap();
        assert_eq!(err.message, ENGAGEMENT_REQUIRED);
        assert_eq!(err.rule, Rule::Required);

        values.engagement_type = "retainer".to_string();
        let err = check_field(FieldName::EngagementType, &values, &copy()).unwrap();
        assert_eq!(err.message, ENGAGEMENT_UNKNOWN);
        assert_eq!(err.rule, Rule::OneOf);

        values.budget_range = "lots".to_string();
        let err = check_field(FieldName::BudgetRange, &values, &copy()).unwrap();
        assert_eq!(err.message, BUDGET_UNKNOWN);
    }

    #[test]
    fn test_optional_fields_never_fail() {
        let mut values = valid_values();
        values.phone = "call me maybe".to_string();
        values.areas_of_interest = vec!["not-an-option".to_string()];
        assert!(check_field(FieldName::Phone, &values, &copy()).is_none());
        assert!(check_field(FieldName::AreasOfInterest, &values, &copy()).is_none());
    }

    #[test]
    fn test_consent_must_be_ticked() {
        let mut values = valid_values();
        values.consent = false;
        let errors = check_all(&values, &copy());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, CONSENT_REQUIRED);
        assert_eq!(errors[0].to_string(), "consent: You must agree to be contacted");
    }
}
