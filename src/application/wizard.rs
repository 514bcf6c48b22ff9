//! Signup wizard state machine.
//!
//! The wizard owns the form values, the touched set and the active step.
//! Validation results are derived on demand from the form values.

use crate::domain::{validate, validate_fields, Field, FieldErrors, SignupForm, Step, SubmissionService};
use std::collections::BTreeSet;
use tracing::{info, warn};

/// Result of pressing Next/Submit.
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceOutcome {
    /// Moved forward to the given step.
    Advanced(Step),
    /// Validation failed; the wizard did not move.
    Blocked(FieldErrors),
    /// The collaborator accepted the form.
    Submitted,
    /// The collaborator rejected the form; the message is in the submit slot.
    SubmitFailed(String),
    /// The form was already submitted; nothing happened.
    Finished,
}

pub struct Wizard {
    form: SignupForm,
    touched: BTreeSet<Field>,
    step: Step,
    submit_error: Option<String>,
    submitted: bool,
    submitter: Box<dyn SubmissionService>,
}

impl Wizard {
    pub fn new(submitter: Box<dyn SubmissionService>) -> Self {
        Self {
            form: SignupForm::default(),
            touched: BTreeSet::new(),
            step: Step::Account,
            submit_error: None,
            submitted: false,
            submitter,
        }
    }

    pub fn form(&self) -> &SignupForm {
        &self.form
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn active_step(&self) -> usize {
        self.step.index()
    }

    pub fn touched(&self) -> &BTreeSet<Field> {
        &self.touched
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn can_go_back(&self) -> bool {
        !self.submitted && self.step != Step::Account
    }

    /// Label of the forward action for the active step.
    pub fn advance_label(&self) -> &'static str {
        if self.step.is_last() { "Submit" } else { "Next" }
    }

    /// Current validation result over the whole schema.
    pub fn errors(&self) -> FieldErrors {
        validate(&self.form)
    }

    /// Error shown next to `field`: present only once the field is touched.
    pub fn visible_error(&self, field: Field) -> Option<String> {
        if !self.is_touched(field) {
            return None;
        }
        crate::domain::check_field(&self.form, field)
    }

    /// Replaces one field's value and marks it touched.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if self.submitted {
            return;
        }
        self.form.set(field, value.into());
        self.touched.insert(field);
    }

    /// Returns true when the step changed.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.step = self.step.previous();
        true
    }

    /// Fields validated when leaving the active step: its own fields and
    /// those of every earlier step.
    pub fn fields_in_scope(&self) -> Vec<Field> {
        Step::ALL[..=self.step.index()]
            .iter()
            .flat_map(|step| step.fields().iter().copied())
            .collect()
    }

    /// Validates the fields in scope and moves forward, or submits on the
    /// last step.
    pub fn advance(&mut self) -> AdvanceOutcome {
        if self.submitted {
            return AdvanceOutcome::Finished;
        }
        if self.step.is_last() {
            return self.submit();
        }

        let scope = self.fields_in_scope();
        let errors = validate_fields(&self.form, &scope);
        if !errors.is_empty() {
            self.touched.extend(scope);
            return AdvanceOutcome::Blocked(errors);
        }

        self.step = self.step.next();
        AdvanceOutcome::Advanced(self.step)
    }

    /// Validates the whole form and hands it to the submission collaborator.
    pub fn submit(&mut self) -> AdvanceOutcome {
        if self.submitted {
            return AdvanceOutcome::Finished;
        }
        self.submit_error = None;

        let errors = self.errors();
        if !errors.is_empty() {
            self.touched.extend(Field::ALL);
            return AdvanceOutcome::Blocked(errors);
        }

        match self.submitter.submit(&self.form) {
            Ok(()) => {
                info!("signup submitted");
                self.submitted = true;
                AdvanceOutcome::Submitted
            }
            Err(err) => {
                let message = err.to_string();
                warn!(error = %message, "signup submission failed");
                self.submit_error = Some(message.clone());
                AdvanceOutcome::SubmitFailed(message)
            }
        }
    }
}

impl std::fmt::Debug for Wizard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wizard")
            .field("step", &self.step)
            .field("touched", &self.touched)
            .field("submit_error", &self.submit_error)
            .field("submitted", &self.submitted)
            .finish_non_exhaustive()
    }
}
