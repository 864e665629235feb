//! Error handling for the provider module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// The body was not a `{quote, author}` object.
    #[error("Malformed quote response: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl ProviderError {
    pub async fn from_response(response: reqwest::Response) -> ProviderError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        ProviderError::Http { status, message }
    }
}
