//! Custom error types for the common library
//!
//! This module defines the errors raised while talking to the remote data
//! provider. They are transport-level failures and carry no domain meaning.

use reqwest::{Error as ReqwestError, StatusCode};
use thiserror::Error;

/// Custom error type for remote provider operations
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The request could not be sent or no response arrived in time
    #[error("Provider request error: {0}")]
    Request(#[source] ReqwestError),

    /// The provider answered with a non-success HTTP status
    #[error("Provider returned status {0}")]
    Status(StatusCode),

    /// The response body was not a valid `{status, result}` envelope
    #[error("Provider response decode error: {0}")]
    Decode(#[source] ReqwestError),

    /// Configuration error
    #[error("Provider configuration error: {0}")]
    Configuration(String),
}

/// Type alias for Result with ProviderError
pub type ProviderResult<T> = Result<T, ProviderError>;
