use std::borrow::Cow;

use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

/// Label used when the visitor leaves the service dropdown untouched.
pub const DEFAULT_SERVICE: &str = "General Services";

/// Anything shorter than this is not a lead worth forwarding.
pub const MIN_MESSAGE_LEN: usize = 10;

/// A submission exactly as it arrives from a form or JSON body.
///
/// Absent fields deserialize to empty strings so that form-encoded and JSON
/// payloads go through the same normalization path.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub message: String,
}

/// A validated contact/demo request, safe to compose notifications from.
#[derive(Debug, Clone, Validate)]
pub struct ContactRequest {
    #[validate(custom(function = name_present))]
    pub name: String,
    #[validate(custom(function = email_shape))]
    pub email: String,
    pub phone: String,
    pub company: String,
    pub service: String,
    #[validate(custom(function = message_length))]
    pub message: String,
}

/// One failed validation rule, addressed to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl ContactFields {
    /// Normalize and validate in a single step.
    ///
    /// Returns either a request that is safe to act upon or one
    /// human-readable message per failed rule, in form order.
    pub fn into_request(self) -> Result<ContactRequest, Vec<FieldError>> {
        let service = self.service.trim();
        let request = ContactRequest {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            company: self.company.trim().to_owned(),
            service: if service.is_empty() {
                DEFAULT_SERVICE.to_owned()
            } else {
                service.to_owned()
            },
            message: self.message.trim().to_owned(),
        };

        match request.validate() {
            Ok(()) => Ok(request),
            Err(errors) => Err(collect_field_errors(&errors)),
        }
    }
}

fn name_present(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::new("name_required")
            .with_message(Cow::Borrowed("Please enter your name.")));
    }
    Ok(())
}

/// Minimal syntactic check: an `@` with a `.` somewhere after it. This is
/// deliberately not RFC 5322 validation; deliverability is the transport's
/// problem.
fn email_shape(email: &str) -> Result<(), ValidationError> {
    let plausible = email
        .split_once('@')
        .is_some_and(|(_, domain)| domain.contains('.'));
    if !plausible {
        return Err(ValidationError::new("email_invalid")
            .with_message(Cow::Borrowed("Please enter a valid email address.")));
    }
    Ok(())
}

fn message_length(message: &str) -> Result<(), ValidationError> {
    if message.is_empty() {
        return Err(ValidationError::new("message_required")
            .with_message(Cow::Borrowed("Please enter a message.")));
    }
    if message.chars().count() < MIN_MESSAGE_LEN {
        return Err(ValidationError::new("message_too_short").with_message(Cow::Owned(format!(
            "Your message must be at least {MIN_MESSAGE_LEN} characters long."
        ))));
    }
    Ok(())
}

/// Flatten `ValidationErrors` into per-field messages, keeping the order the
/// fields appear on the form.
fn collect_field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out = Vec::new();
    let by_field = errors.field_errors();
    for field in ["name", "email", "message"] {
        let Some(field_errors) = by_field.get(field) else {
            continue;
        };
        for error in field_errors.iter() {
            let message = error
                .message
                .as_deref()
                .unwrap_or("Please fill in all required fields correctly.")
                .to_owned();
            out.push(FieldError { field, message });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> ContactFields {
        ContactFields {
            name: "Jane".into(),
            email: "jane@x.com".into(),
            message: "Please send pricing".into(),
            ..ContactFields::default()
        }
    }

    #[test]
    fn accepts_a_minimal_valid_submission() {
        let request = valid_fields().into_request().expect("should validate");
        assert_eq!(request.name, "Jane");
        assert_eq!(request.email, "jane@x.com");
        assert_eq!(request.service, DEFAULT_SERVICE);
        assert!(request.phone.is_empty());
        assert!(request.company.is_empty());
    }

    #[test]
    fn trims_whitespace_before_validating() {
        let request = ContactFields {
            name: "  Jane  ".into(),
            email: " jane@x.com ".into(),
            message: "  Please send pricing  ".into(),
            ..ContactFields::default()
        }
        .into_request()
        .expect("trimmed fields should validate");
        assert_eq!(request.name, "Jane");
        assert_eq!(request.email, "jane@x.com");
        assert_eq!(request.message, "Please send pricing");
    }

    #[test]
    fn rejects_missing_name() {
        let errors = ContactFields {
            name: "   ".into(),
            ..valid_fields()
        }
        .into_request()
        .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
    }

    #[test]
    fn rejects_email_without_at_sign() {
        let errors = ContactFields {
            email: "jane.x.com".into(),
            ..valid_fields()
        }
        .into_request()
        .unwrap_err();
        assert_eq!(errors[0].field, "email");
    }

    #[test]
    fn rejects_email_without_dot_after_at_sign() {
        let errors = ContactFields {
            email: "jane@com".into(),
            ..valid_fields()
        }
        .into_request()
        .unwrap_err();
        assert_eq!(errors[0].field, "email");
    }

    #[test]
    fn dot_before_the_at_sign_does_not_count() {
        let errors = ContactFields {
            email: "jane.doe@com".into(),
            ..valid_fields()
        }
        .into_request()
        .unwrap_err();
        assert_eq!(errors[0].field, "email");
    }

    #[test]
    fn rejects_empty_message() {
        let errors = ContactFields {
            message: "".into(),
            ..valid_fields()
        }
        .into_request()
        .unwrap_err();
        assert_eq!(errors[0].field, "message");
        assert_eq!(errors[0].message, "Please enter a message.");
    }

    #[test]
    fn rejects_message_below_minimum_length() {
        let errors = ContactFields {
            message: "too short".into(),
            ..valid_fields()
        }
        .into_request()
        .unwrap_err();
        assert_eq!(errors[0].field, "message");
        assert!(errors[0].message.contains("10 characters"));
    }

    #[test]
    fn reports_every_failed_rule_in_form_order() {
        let errors = ContactFields::default().into_request().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "email", "message"]);
    }

    #[test]
    fn keeps_an_explicit_service_choice() {
        let request = ContactFields {
            service: "Import / Export Logistics".into(),
            ..valid_fields()
        }
        .into_request()
        .expect("should validate");
        assert_eq!(request.service, "Import / Export Logistics");
    }

    #[test]
    fn blank_service_falls_back_to_the_default_label() {
        let request = ContactFields {
            service: "   ".into(),
            ..valid_fields()
        }
        .into_request()
        .expect("should validate");
        assert_eq!(request.service, DEFAULT_SERVICE);
    }
}
