//! Error types for the application.
//!
//! This module provides the application's error hierarchy. The `AppError` enum
//! serves as the top-level error type that wraps domain-specific errors such as
//! configuration failures and audit-log fetch failures. Background tasks never
//! surface errors to an end user; everything degrades to log output, so these
//! types exist for propagation and log formatting rather than response mapping.

pub mod config;
pub mod fetch;

use thiserror::Error;

use crate::error::{config::ConfigError, fetch::FetchError};

/// Top-level application error type.
///
/// Aggregates all error types that can occur in the application. Most variants
/// use `#[from]` for automatic conversion with the `?` operator.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Audit-log fetch error from the group API.
    #[error(transparent)]
    FetchErr(#[from] FetchError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Occurs when sending notifications or replying
    /// to interactions fails.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Filesystem error reading or writing one of the durable state files.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// JSON (de)serialization error for a durable state file.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
