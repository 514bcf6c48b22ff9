//! Validation schema for the signup form.
//!
//! Validity is always derived from the current [`SignupForm`]; nothing
//! here is stored. Each field reports at most one message, the first
//! rule it fails.

use super::models::{Field, SignupForm};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

pub const MIN_PASSWORD_LENGTH: usize = 8;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("email pattern is valid")
});

/// Failing fields mapped to their message.
pub type FieldErrors = BTreeMap<Field, String>;

/// Validates every field of the form.
///
/// # Examples
///
/// ```
/// use tsform::domain::{validate, Field, SignupForm};
///
/// let errors = validate(&SignupForm::default());
/// assert_eq!(errors[&Field::Email], "Email is required");
/// assert!(!errors.contains_key(&Field::Phone));
/// ```
pub fn validate(form: &SignupForm) -> FieldErrors {
    validate_fields(form, &Field::ALL)
}

/// Validates only the given fields.
pub fn validate_fields(form: &SignupForm, fields: &[Field]) -> FieldErrors {
    fields
        .iter()
        .filter_map(|&field| check_field(form, field).map(|message| (field, message)))
        .collect()
}

/// Returns the message for the first rule `field` fails, if any.
pub fn check_field(form: &SignupForm, field: Field) -> Option<String> {
    let value = form.get(field);
    let message = match field {
        Field::Email if value.is_empty() => "Email is required",
        Field::Email if !is_valid_email(value) => "Enter a valid email",
        Field::Password | Field::ConfirmPassword if value.chars().count() < MIN_PASSWORD_LENGTH => {
            "Password should be of minimum 8 characters length"
        }
        Field::ConfirmPassword if value != form.password => "Passwords must match",
        Field::FirstName if value.is_empty() => "First name is required",
        Field::LastName if value.is_empty() => "Last name is required",
        _ => return None,
    };
    Some(message.to_string())
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> SignupForm {
        SignupForm {
            email: "a@b.com".to_string(),
            password: "12345678".to_string(),
            confirm_password: "12345678".to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            phone: String::new(),
            residence: String::new(),
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(validate(&valid_form()).is_empty());
    }

    #[test]
    fn test_empty_form_reports_required_fields() {
        let errors = validate(&SignupForm::default());
        assert_eq!(
            errors.keys().copied().collect::<Vec<_>>(),
            vec![
                Field::Email,
                Field::Password,
                Field::ConfirmPassword,
                Field::FirstName,
                Field::LastName
            ]
        );
    }

    #[test]
    fn test_email_syntax() {
        for good in ["a@b.com", "first.last@example.co.uk", "x+tag@host.io"] {
            assert!(is_valid_email(good), "{}", good);
        }
        for bad in ["", "plain", "a@b", "@b.com", "a b@c.com", "a@b.", "a@@b.com", "a@b..com", "a@..com", "a@.b.com"] {
            assert!(!is_valid_email(bad), "{}", bad);
        }

        let mut form = valid_form();
        form.email = "not-an-email".to_string();
        assert_eq!(validate(&form)[&Field::Email], "Enter a valid email");
    }

    #[test]
    fn test_short_password_fails_regardless_of_other_fields() {
        let mut form = valid_form();
        form.password = "1234567".to_string();
        form.confirm_password = "1234567".to_string();

        let errors = validate(&form);
        assert!(errors.contains_key(&Field::Password));
        assert!(errors.contains_key(&Field::ConfirmPassword));
    }

    #[test]
    fn test_password_length_counts_characters_not_bytes() {
        let mut form = valid_form();
        form.password = "ééééééé".to_string();
        form.confirm_password = form.password.clone();
        assert!(validate(&form).contains_key(&Field::Password));
    }

    #[test]
    fn test_mismatched_confirmation() {
        let mut form = valid_form();
        form.confirm_password = "87654321".to_string();

        let errors = validate(&form);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&Field::ConfirmPassword], "Passwords must match");
    }

    #[test]
    fn test_optional_fields_never_fail() {
        let form = valid_form();
        assert_eq!(check_field(&form, Field::Phone), None);
        assert_eq!(check_field(&form, Field::Residence), None);
    }

    #[test]
    fn test_validate_fields_limits_scope() {
        let form = SignupForm::default();
        let errors = validate_fields(&form, &[Field::FirstName, Field::Phone]);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key(&Field::FirstName));
    }
}
