//! Generation error types

use thiserror::Error;

/// Message shown when the service rejects a request without explaining why
pub const GENERIC_API_FAILURE: &str = "Failed to generate image";
/// Message shown when a successful response carries no inline image
pub const NO_IMAGE_DATA: &str = "No image data received";
/// Message shown when a failure carries no message of its own
pub const GENERIC_FAILURE: &str = "An error occurred";

/// Errors that can occur while generating an image
///
/// `Display` is the user-visible message shown in the tool's error state.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// The service answered with a non-success status
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The service answered successfully but without inline image data
    #[error("No image data received")]
    NoImageData,

    /// Network/HTTP error, including timeouts. Carries no request URL.
    #[error("{0}")]
    Http(reqwest::Error),

    /// JSON parsing error
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    /// The job was abandoned because its view went away
    #[error("Request cancelled")]
    Cancelled,

    /// Any other failure, such as the HTTP client failing to build
    #[error("{0}")]
    Other(String),
}

// The request URL carries the API key as a query parameter
impl From<reqwest::Error> for GenerationError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.without_url())
    }
}

impl GenerationError {
    /// Create an API error
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Message for the tool's error state, never empty
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_FAILURE.to_string()
        } else {
            message
        }
    }
}

pub type GenerationResult<T> = Result<T, GenerationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            GenerationError::api_error(400, "API key not valid").user_message(),
            "API key not valid"
        );
        assert_eq!(GenerationError::NoImageData.user_message(), NO_IMAGE_DATA);
        assert_eq!(GenerationError::Other(String::new()).user_message(), GENERIC_FAILURE);
    }
}
