//! Error types for the Leads API client

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LeadsError {
    /// Empty or whitespace-only token at construction
    #[error("Token is required")]
    InvalidToken,
    /// Empty or whitespace-only domain passed to the fetch call
    #[error("Domain is required")]
    InvalidDomain,
    /// Any failure while setting up or performing the request
    #[error("Request failed: {message}")]
    Transport { message: String },
}

impl From<reqwest::Error> for LeadsError {
    fn from(e: reqwest::Error) -> Self {
        LeadsError::Transport {
            message: e.to_string(),
        }
    }
}
