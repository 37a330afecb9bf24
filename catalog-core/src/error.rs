use thiserror::Error;

/// Failures talking to the product service.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Serialization error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Server error: {status}")]
    Status { status: u16, message: Option<String> },
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl ApiError {
    /// Message the service put in its error body, if it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Reasons a form submission is refused before any request is made.
///
/// The display text is what the user sees in the notification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in all required fields.")]
    MissingFields,
    #[error("The code must be a valid number greater than zero.")]
    InvalidCode,
    #[error("A product with code {0} already exists. Choose another code.")]
    DuplicateCode(u64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_only_for_status_errors() {
        let err = ApiError::Status {
            status: 409,
            message: Some("Product already exists".to_string()),
        };
        assert_eq!(err.server_message(), Some("Product already exists"));
        assert_eq!(err.status(), Some(409));

        let err = ApiError::InvalidBaseUrl("nope".to_string());
        assert_eq!(err.server_message(), None);
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_form_error_text() {
        assert_eq!(
            FormError::DuplicateCode(7).to_string(),
            "A product with code 7 already exists. Choose another code."
        );
    }
}
