use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Field name → message, keyed by the API's form field names.
pub type FieldErrors = HashMap<String, String>;

pub const CONNECTIVITY_MESSAGE: &str =
    "Unable to connect to the server. Please check your internet connection.";
pub const SUBMIT_FAILED_MESSAGE: &str =
    "An error occurred while submitting the form. Please try again.";
pub const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// Categorization of front-end errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    /// Field-keyed errors, either from local validation or returned by the API.
    Validation,
    /// A business error carrying a single message from the API.
    Server,
    /// The request was sent but no response came back.
    Connectivity,
    NotFound,
    Unexpected,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::Validation => write!(f, "Validation"),
            AppErrorKind::Server => write!(f, "Server"),
            AppErrorKind::Connectivity => write!(f, "Connectivity"),
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::Unexpected => write!(f, "Unexpected"),
        }
    }
}

/// Structured error surfaced by the API client and controllers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: FieldErrors,
}

impl AppError {
    pub fn validation(message: impl Into<String>, field_errors: FieldErrors) -> Self {
        Self {
            kind: AppErrorKind::Validation,
            message: message.into(),
            field_errors,
        }
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Server,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn connectivity() -> Self {
        Self {
            kind: AppErrorKind::Connectivity,
            message: CONNECTIVITY_MESSAGE.to_string(),
            field_errors: HashMap::new(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::NotFound,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Unexpected,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == AppErrorKind::NotFound
    }

    pub fn is_connectivity(&self) -> bool {
        self.kind == AppErrorKind::Connectivity
    }

    /// Build an error from a non-success response body.
    ///
    /// A structured `errors` object wins over `message`; with neither present
    /// the caller's fallback message is used.
    pub fn from_response_body(body: &serde_json::Value, fallback: &str) -> Self {
        if let Some(errors) = body.get("errors").and_then(|e| e.as_object()) {
            let field_errors: FieldErrors = errors
                .iter()
                .map(|(field, msg)| {
                    let text = match msg {
                        serde_json::Value::String(s) => s.clone(),
                        serde_json::Value::Array(items) => items
                            .first()
                            .and_then(|v| v.as_str())
                            .unwrap_or(fallback)
                            .to_string(),
                        other => other.to_string(),
                    };
                    (field.clone(), text)
                })
                .collect();
            if !field_errors.is_empty() {
                return Self::validation("Validation failed", field_errors);
            }
        }
        match body.get("message").and_then(|m| m.as_str()) {
            Some(msg) if !msg.is_empty() => Self::server(msg),
            _ => Self::server(fallback),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}
