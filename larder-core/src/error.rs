use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Recipe API returned status {0}")]
    Status(u16),

    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// True when the API answered but with a non-200 status.
    pub fn is_status(&self) -> bool {
        matches!(self, ApiError::Status(_))
    }
}

/// A single rejected form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// All field errors collected while validating one form, in field order.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("{}", first_message(.0))]
pub struct ValidationErrors(pub Vec<FieldError>);

fn first_message(errors: &[FieldError]) -> &str {
    errors
        .first()
        .map(|e| e.message.as_str())
        .unwrap_or("Invalid input")
}

impl ValidationErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Ok when nothing was pushed.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}
