//! Error handling for the backend module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// A local file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BackendError {
    pub async fn from_response(response: reqwest::Response) -> BackendError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        BackendError::Http { status, message }
    }
}
