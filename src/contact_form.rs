//! Contact form state: field values, touched flags and submission status.
//!
//! Validation errors are never stored. They are recomputed from the current
//! values on every read, so fixing a field clears its error on the next
//! keystroke without waiting for another blur.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use yew::Reducible;

static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

pub const MIN_MESSAGE_CHARS: usize = 10;

pub const BLOCKED_SUMMARY: &str = "Please fix the errors in the form";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Company,
    Message,
    Subject,
}

impl Field {
    /// Fields with a constraint; these are the ones a submit attempt touches.
    pub const VALIDATED: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Company => "company",
            Field::Message => "message",
            Field::Subject => "subject",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Message should be more than 10 characters")]
    MessageTooShort,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Subject {
    #[default]
    #[serde(rename = "General Inquiry")]
    GeneralInquiry,
    #[serde(rename = "Partnership Opportunity")]
    Partnership,
    #[serde(rename = "Technical Support")]
    TechnicalSupport,
    #[serde(rename = "Career Inquiry")]
    Career,
    #[serde(rename = "Other")]
    Other,
}

impl Subject {
    pub const ALL: [Subject; 5] = [
        Subject::GeneralInquiry,
        Subject::Partnership,
        Subject::TechnicalSupport,
        Subject::Career,
        Subject::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Subject::GeneralInquiry => "General Inquiry",
            Subject::Partnership => "Partnership Opportunity",
            Subject::TechnicalSupport => "Technical Support",
            Subject::Career => "Career Inquiry",
            Subject::Other => "Other",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Subject {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subject::ALL
            .into_iter()
            .find(|subject| subject.label() == s)
            .ok_or(())
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value.trim())
}

/// Pure per-field check. Unconstrained fields always pass.
pub fn validate(field: Field, value: &str) -> Option<FieldError> {
    match field {
        Field::Name if value.trim().is_empty() => Some(FieldError::NameRequired),
        Field::Email if !is_valid_email(value) => Some(FieldError::InvalidEmail),
        Field::Message if value.trim().chars().count() <= MIN_MESSAGE_CHARS => {
            Some(FieldError::MessageTooShort)
        }
        _ => None,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactValues {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
    pub subject: Subject,
}

impl ContactValues {
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Message => &self.message,
            Field::Subject => self.subject.label(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Touched {
    name: bool,
    email: bool,
    message: bool,
}

impl Touched {
    fn get(&self, field: Field) -> bool {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Message => self.message,
            Field::Company | Field::Subject => false,
        }
    }

    fn set(&mut self, field: Field) {
        match field {
            Field::Name => self.name = true,
            Field::Email => self.email = true,
            Field::Message => self.message = true,
            Field::Company | Field::Subject => {}
        }
    }

    fn all() -> Self {
        Self {
            name: true,
            email: true,
            message: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
    /// A submit attempt was blocked by validation errors.
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormAction {
    Edit(Field, String),
    Blur(Field),
    Submit,
    Completed,
    Reset,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    values: ContactValues,
    touched: Touched,
    status: SubmitStatus,
}

impl ContactForm {
    pub fn values(&self) -> &ContactValues {
        &self.values
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.get(field)
    }

    /// The error to display next to `field`: only once the user has left it.
    pub fn visible_error(&self, field: Field) -> Option<FieldError> {
        if !self.touched.get(field) {
            return None;
        }
        validate(field, self.values.text(field))
    }

    pub fn errors(&self) -> Vec<(Field, FieldError)> {
        Field::VALIDATED
            .into_iter()
            .filter_map(|field| validate(field, self.values.text(field)).map(|err| (field, err)))
            .collect()
    }

    /// Summary banner shown above the form after a blocked submit.
    pub fn summary(&self) -> Option<&'static str> {
        (self.status == SubmitStatus::Failed).then_some(BLOCKED_SUMMARY)
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::Edit(field, value) => self.edit(field, value),
            FormAction::Blur(field) => self.touched.set(field),
            FormAction::Submit => {
                self.submit();
            }
            FormAction::Completed => {
                if self.status == SubmitStatus::Submitting {
                    self.values = ContactValues::default();
                    self.touched = Touched::default();
                    self.status = SubmitStatus::Submitted;
                }
            }
            FormAction::Reset => {
                if self.status == SubmitStatus::Submitted {
                    self.status = SubmitStatus::Idle;
                }
            }
        }
    }

    /// Attempts a submission. Returns the payload to deliver when the form is
    /// valid and moved to `Submitting`.
    pub fn submit(&mut self) -> Option<ContactValues> {
        if self.status == SubmitStatus::Submitting {
            return None;
        }

        self.touched = Touched::all();
        if !self.errors().is_empty() {
            self.status = SubmitStatus::Failed;
            return None;
        }

        self.status = SubmitStatus::Submitting;
        Some(self.values.clone())
    }

    fn edit(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.values.name = value,
            Field::Email => self.values.email = value,
            Field::Company => self.values.company = value,
            Field::Message => self.values.message = value,
            Field::Subject => {
                if let Ok(subject) = value.parse() {
                    self.values.subject = subject;
                }
            }
        }
    }
}

impl Reducible for ContactForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(form: &mut ContactForm, field: Field, value: &str) {
        form.apply(FormAction::Edit(field, value.to_string()));
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        edit(&mut form, Field::Name, "Ada Lovelace");
        edit(&mut form, Field::Email, "ada@example.com");
        edit(&mut form, Field::Message, "Twenty chars exactly");
        form
    }

    #[test]
    fn field_ids_match_payload_keys() {
        let json = serde_json::to_value(ContactValues::default()).unwrap();
        for field in [Field::Name, Field::Email, Field::Company, Field::Message, Field::Subject] {
            assert!(json.get(field.as_str()).is_some(), "{} missing", field.as_str());
        }
    }

    #[test]
    fn validation_rules() {
        assert_eq!(validate(Field::Name, "   "), Some(FieldError::NameRequired));
        assert_eq!(validate(Field::Name, " Ada "), None);
        assert_eq!(validate(Field::Email, "not-an-email"), Some(FieldError::InvalidEmail));
        assert_eq!(validate(Field::Email, "a@b"), Some(FieldError::InvalidEmail));
        assert_eq!(validate(Field::Email, "a@b.com"), None);
        assert_eq!(validate(Field::Email, "a b@c.com"), Some(FieldError::InvalidEmail));
        assert_eq!(validate(Field::Message, "0123456789"), Some(FieldError::MessageTooShort));
        assert_eq!(validate(Field::Message, "  0123456789  "), Some(FieldError::MessageTooShort));
        assert_eq!(validate(Field::Message, "0123456789a"), None);
        assert_eq!(validate(Field::Company, ""), None);
    }

    #[test]
    fn errors_hidden_until_touched() {
        let mut form = ContactForm::default();
        edit(&mut form, Field::Email, "a@b");
        assert_eq!(form.visible_error(Field::Email), None);
        assert_eq!(form.visible_error(Field::Name), None);
    }

    #[test]
    fn error_clears_reactively_after_blur() {
        let mut form = ContactForm::default();
        edit(&mut form, Field::Email, "a@b");
        form.apply(FormAction::Blur(Field::Email));
        assert_eq!(form.visible_error(Field::Email), Some(FieldError::InvalidEmail));

        edit(&mut form, Field::Email, "a@b.com");
        assert_eq!(form.visible_error(Field::Email), None);
        assert!(form.is_touched(Field::Email));
    }

    #[test]
    fn invalid_submit_is_blocked_and_surfaces_errors() {
        let mut form = ContactForm::default();
        edit(&mut form, Field::Email, "not-an-email");
        edit(&mut form, Field::Message, "This message is long enough");

        assert_eq!(form.submit(), None);
        assert_eq!(form.status(), SubmitStatus::Failed);
        assert_eq!(form.summary(), Some(BLOCKED_SUMMARY));
        assert_eq!(form.visible_error(Field::Name), Some(FieldError::NameRequired));
        assert_eq!(form.visible_error(Field::Email), Some(FieldError::InvalidEmail));
        assert_eq!(form.visible_error(Field::Message), None);
        assert_eq!(form.values().email, "not-an-email");
    }

    #[test]
    fn valid_submit_completes_and_clears() {
        let mut form = filled();
        edit(&mut form, Field::Subject, "Technical Support");
        form.apply(FormAction::Blur(Field::Name));

        let payload = form.submit().expect("valid form submits");
        assert_eq!(payload.name, "Ada Lovelace");
        assert_eq!(payload.subject, Subject::TechnicalSupport);
        assert_eq!(form.status(), SubmitStatus::Submitting);
        assert_eq!(form.summary(), None);

        form.apply(FormAction::Completed);
        assert_eq!(form.status(), SubmitStatus::Submitted);
        assert_eq!(form.values(), &ContactValues::default());
        for field in Field::VALIDATED {
            assert!(!form.is_touched(field));
        }
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut form = filled();
        assert!(form.submit().is_some());
        assert!(form.submit().is_none());
        assert_eq!(form.status(), SubmitStatus::Submitting);
    }

    #[test]
    fn completion_outside_submitting_is_ignored() {
        let mut form = filled();
        form.apply(FormAction::Completed);
        assert_eq!(form.status(), SubmitStatus::Idle);
        assert_eq!(form.values().name, "Ada Lovelace");
    }

    #[test]
    fn reset_returns_to_blank_editable_form() {
        let mut form = filled();
        form.apply(FormAction::Submit);
        form.apply(FormAction::Completed);
        form.apply(FormAction::Reset);
        assert_eq!(form.status(), SubmitStatus::Idle);
        assert_eq!(form.errors().len(), 3);
        assert_eq!(form.visible_error(Field::Name), None);
    }

    #[test]
    fn blocked_then_fixed_submit_proceeds() {
        let mut form = ContactForm::default();
        form.apply(FormAction::Submit);
        assert_eq!(form.status(), SubmitStatus::Failed);

        edit(&mut form, Field::Name, "Ada Lovelace");
        edit(&mut form, Field::Email, "ada@example.com");
        edit(&mut form, Field::Message, "Twenty chars exactly");
        form.apply(FormAction::Submit);
        assert_eq!(form.status(), SubmitStatus::Submitting);
    }

    #[test]
    fn subject_defaults_and_ignores_unknown_labels() {
        let mut form = ContactForm::default();
        assert_eq!(form.values().subject, Subject::GeneralInquiry);
        edit(&mut form, Field::Subject, "Career Inquiry");
        assert_eq!(form.values().subject, Subject::Career);
        edit(&mut form, Field::Subject, "Sales");
        assert_eq!(form.values().subject, Subject::Career);
    }

    #[test]
    fn payload_serializes_subject_label() {
        let json = serde_json::to_value(filled().values()).unwrap();
        assert_eq!(json["subject"], "General Inquiry");
        assert_eq!(json["email"], "ada@example.com");
    }
}
