//! Contact Form Validation
//!
//! Fields are trimmed, then checked in a fixed order (name, email,
//! message); the first failure wins. Submission is simulated, so a valid
//! form only changes the status line.

use std::sync::OnceLock;

use regex::Regex;

use crate::config::{MESSAGE_MIN_CHARS, NAME_MIN_CHARS};
use crate::error::{FormField, ValidationError, ValidationReason};

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
}

/// local-part "@" domain-with-a-dot, compared case-insensitively
pub fn is_email(value: &str) -> bool {
    email_regex().is_match(&value.to_lowercase())
}

/// Raw values of the four contact fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    /// Collected but not validated
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let form = self.trimmed();
        check_length(FormField::Name, &form.name, NAME_MIN_CHARS)?;

        if form.email.is_empty() {
            return Err(ValidationError { field: FormField::Email, reason: ValidationReason::Missing });
        }
        if !is_email(&form.email) {
            return Err(ValidationError { field: FormField::Email, reason: ValidationReason::Malformed });
        }

        check_length(FormField::Message, &form.message, MESSAGE_MIN_CHARS)
    }
}

fn check_length(field: FormField, value: &str, min: usize) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError { field, reason: ValidationReason::Missing })
    } else if value.chars().count() < min {
        Err(ValidationError { field, reason: ValidationReason::TooShort { min } })
    } else {
        Ok(())
    }
}

/// Status line under the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormStatus {
    pub text: &'static str,
    pub ok: bool,
}

pub const SUBMITTED_TEXT: &str = "Mensagem enviada com sucesso! Retornaremos em breve.";

/// Where the form is after the latest submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Rejected(ValidationError),
    Submitted,
}

impl FormPhase {
    pub fn status(&self) -> Option<FormStatus> {
        match self {
            FormPhase::Idle => None,
            FormPhase::Rejected(e) => Some(FormStatus { text: e.user_message(), ok: false }),
            FormPhase::Submitted => Some(FormStatus { text: SUBMITTED_TEXT, ok: true }),
        }
    }

    /// Field that should receive focus
    pub fn focus(&self) -> Option<FormField> {
        match self {
            FormPhase::Rejected(e) => Some(e.field),
            _ => None,
        }
    }
}

/// Run one submit attempt
pub fn submit(form: &ContactForm) -> FormPhase {
    match form.validate() {
        Ok(()) => FormPhase::Submitted,
        Err(e) => {
            log::debug!("contact form rejected: {}", e);
            FormPhase::Rejected(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            phone: String::new(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_is_email() {
        assert!(is_email("a@b.co"));
        assert!(is_email("Maria.Silva@Example.COM.br"));
        assert!(!is_email("a@b"));
        assert!(!is_email("a@@b.com"));
        assert!(!is_email(""));
        assert!(!is_email("a b@c.com"));
    }

    #[test]
    fn test_two_char_name_submits() {
        let phase = submit(&form("Jo", "jo@mail.com", "Gostaria de saber mais"));
        assert_eq!(phase, FormPhase::Submitted);
        assert_eq!(phase.status(), Some(FormStatus { text: SUBMITTED_TEXT, ok: true }));
        assert_eq!(phase.focus(), None);
    }

    #[test]
    fn test_one_char_name_is_rejected() {
        let input = form("J", "jo@mail.com", "Gostaria de saber mais");
        let phase = submit(&input);
        assert_eq!(
            phase,
            FormPhase::Rejected(ValidationError {
                field: FormField::Name,
                reason: ValidationReason::TooShort { min: 2 },
            })
        );
        assert_eq!(phase.focus(), Some(FormField::Name));
        assert_eq!(phase.status().unwrap().text, "Por favor, informe seu nome completo.");
        // Input is left as typed
        assert_eq!(input.name, "J");
    }

    #[test]
    fn test_first_failure_wins() {
        let phase = submit(&form("", "bad", ""));
        assert_eq!(phase.focus(), Some(FormField::Name));

        let phase = submit(&form("Ana", "bad", ""));
        assert_eq!(
            phase,
            FormPhase::Rejected(ValidationError { field: FormField::Email, reason: ValidationReason::Malformed })
        );

        let phase = submit(&form("Ana", "ana@mail.com", "curta"));
        assert_eq!(phase.focus(), Some(FormField::Message));
        assert!(!phase.status().unwrap().ok);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(
            form("   ", "a@b.co", "mensagem longa o bastante").validate(),
            Err(ValidationError { field: FormField::Name, reason: ValidationReason::Missing })
        );
        assert_eq!(
            form("Ana", "a@b.co", "   123456789   ").validate().unwrap_err().reason,
            ValidationReason::TooShort { min: 10 }
        );
        assert!(form(" Jo ", "  a@b.co ", "  0123456789 ").validate().is_ok());
    }

    #[test]
    fn test_idle_has_no_status() {
        assert_eq!(FormPhase::default().status(), None);
    }
}
