//! Error Types
//!
//! None of these reach the user as a failure: storage and decode errors
//! degrade to defaults, validation errors become a status message, and a
//! missing DOM handle disables one feature.

use std::fmt;

use thiserror::Error;

/// Browser storage failures (swallowed by the storage shim)
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is not available in this context")]
    Unavailable,
    #[error("failed to read key {key}: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write key {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Persisted cart text could not be decoded
#[derive(Debug, Error)]
#[error("malformed cart payload: {0}")]
pub struct CartDecodeError(#[from] pub serde_json::Error);

/// Contact form fields taking part in validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Message => "message",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationReason {
    Missing,
    TooShort { min: usize },
    Malformed,
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationReason::Missing => f.write_str("is empty"),
            ValidationReason::TooShort { min } => write!(f, "is shorter than {} characters", min),
            ValidationReason::Malformed => f.write_str("is malformed"),
        }
    }
}

/// First failing field of a contact form submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field} {reason}")]
pub struct ValidationError {
    pub field: FormField,
    pub reason: ValidationReason,
}

impl ValidationError {
    /// Status line shown under the form
    pub fn user_message(&self) -> &'static str {
        match self.field {
            FormField::Name => "Por favor, informe seu nome completo.",
            FormField::Email => "Informe um e‑mail válido.",
            FormField::Message => "Descreva sua mensagem com pelo menos 10 caracteres.",
        }
    }
}

/// A browser capability or element a feature needs is absent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing DOM handle: {0}")]
pub struct MissingHandle(pub &'static str);
