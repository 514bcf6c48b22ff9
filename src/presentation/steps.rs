//! Step views: pure bindings from wizard state to what each input shows.

use crate::application::Wizard;
use crate::domain::{Field, Step};

/// Everything needed to draw one bound input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: Field,
    pub label: &'static str,
    pub display: String,
    pub error: Option<String>,
    pub focused: bool,
}

/// Binds each field in `fields` to its value, its visible error and focus.
pub fn bind_fields(wizard: &Wizard, fields: &[Field], focused: Option<Field>) -> Vec<FieldView> {
    fields
        .iter()
        .map(|&field| FieldView {
            field,
            label: field.label(),
            display: display_value(field, wizard.form().get(field)),
            error: wizard.visible_error(field),
            focused: focused == Some(field),
        })
        .collect()
}

pub fn account_details(wizard: &Wizard, focused: Option<Field>) -> Vec<FieldView> {
    bind_fields(wizard, Step::Account.fields(), focused)
}

pub fn personal_info(wizard: &Wizard, focused: Option<Field>) -> Vec<FieldView> {
    bind_fields(wizard, Step::Personal.fields(), focused)
}

/// Read-only summary of every field.
pub fn review(wizard: &Wizard) -> Vec<FieldView> {
    bind_fields(wizard, &Field::ALL, None)
}

/// Views for whichever step is active.
pub fn step_view(wizard: &Wizard, focused: Option<Field>) -> Vec<FieldView> {
    match wizard.step() {
        Step::Account => account_details(wizard, focused),
        Step::Personal => personal_info(wizard, focused),
        Step::Review => review(wizard),
    }
}

fn display_value(field: Field, value: &str) -> String {
    if field.is_secret() {
        "•".repeat(value.chars().count())
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SignupForm, SubmissionService, SubmitError};

    struct Noop;

    impl SubmissionService for Noop {
        fn submit(&self, _form: &SignupForm) -> Result<(), SubmitError> {
            Ok(())
        }
    }

    fn wizard() -> Wizard {
        Wizard::new(Box::new(Noop))
    }

    #[test]
    fn test_account_details_binds_its_own_fields() {
        let mut wizard = wizard();
        wizard.set_field(Field::Email, "a@b.com");
        wizard.set_field(Field::Password, "hunter22");

        let views = account_details(&wizard, Some(Field::Password));
        let fields: Vec<_> = views.iter().map(|v| v.field).collect();
        assert_eq!(fields, vec![Field::Email, Field::Password, Field::ConfirmPassword]);
        assert_eq!(views[0].display, "a@b.com");
        assert_eq!(views[1].display, "••••••••");
        assert!(views[1].focused);
        assert!(!views[0].focused);
    }

    #[test]
    fn test_personal_info_binds_each_field_to_itself() {
        let mut wizard = wizard();
        wizard.set_field(Field::Email, "a@b.com");
        wizard.set_field(Field::FirstName, "Ada");
        wizard.set_field(Field::LastName, "Lovelace");
        wizard.set_field(Field::Phone, "555-0100");
        wizard.set_field(Field::Residence, "London");

        let views = personal_info(&wizard, None);
        let shown: Vec<_> = views.iter().map(|v| (v.field, v.display.as_str())).collect();
        assert_eq!(
            shown,
            vec![
                (Field::FirstName, "Ada"),
                (Field::LastName, "Lovelace"),
                (Field::Phone, "555-0100"),
                (Field::Residence, "London"),
            ]
        );
    }

    #[test]
    fn test_errors_only_for_touched_fields() {
        let mut wizard = wizard();
        wizard.set_field(Field::Email, "broken");

        let views = account_details(&wizard, None);
        assert_eq!(views[0].error.as_deref(), Some("Enter a valid email"));
        assert_eq!(views[1].error, None);
        assert_eq!(views[2].error, None);
    }

    #[test]
    fn test_review_lists_every_field() {
        let views = review(&wizard());
        assert_eq!(views.len(), Field::ALL.len());
        assert!(views.iter().all(|v| !v.focused));
    }
}
