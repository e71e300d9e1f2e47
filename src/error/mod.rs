//! Error types and user-facing reply mapping.
//!
//! This module provides the application's error hierarchy. The `AppError` enum is the
//! top-level error type returned by services and controllers. Interaction handlers turn
//! it into an ephemeral reply with `AppError::user_message`, logging anything that is
//! not an expected workflow failure.

pub mod config;
pub mod internal;
pub mod ticket;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError, ticket::TicketError};

/// Generic text shown to users for unexpected failures.
const GENERIC_ERROR: &str = "Something went wrong while processing that, please try again.";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most variants
/// use `#[from]` for automatic error conversion. `TicketErr` carries the expected
/// workflow failures whose text is safe to show, the remaining variants are treated as
/// unexpected and only described generically unless detail exposure is enabled.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Expected ticket workflow failure.
    #[error(transparent)]
    TicketErr(#[from] TicketError),

    /// Internal bug or malformed interaction payload.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Filesystem error while reading settings or writing transcripts.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Settings document could not be parsed or serialized.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error, shown to the user as is.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    BadRequest(String),

    /// Internal error with custom message.
    ///
    /// # Fields
    /// - Detailed error message for server-side logging
    #[error("{0}")]
    InternalError(String),
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

impl AppError {
    /// Whether the error is an expected outcome rather than a failure worth logging.
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::TicketErr(_) | Self::NotFound(_) | Self::BadRequest(_)
        )
    }

    /// Builds the text shown to the user in an ephemeral reply.
    ///
    /// Expected errors show their own message. Unexpected errors show a generic
    /// message, with the underlying error appended when `expose_details` is set.
    ///
    /// # Arguments
    /// - `expose_details` - Append the underlying error text for unexpected errors
    ///
    /// # Returns
    /// - `String` - Message safe to send back to the invoking user
    pub fn user_message(&self, expose_details: bool) -> String {
        if self.is_expected() {
            return self.to_string();
        }

        if expose_details {
            format!("{} ({})", GENERIC_ERROR, self)
        } else {
            GENERIC_ERROR.to_string()
        }
    }
}
