//! Error types and Discord-facing error text.
//!
//! `AppError` is the top-level error returned by services and handlers. Validation
//! failures that the invoking user should see live in `PromotionError` and `CommandError`;
//! everything else is an I/O or internal failure that gets logged and answered with a
//! generic message.

pub mod command;
pub mod config;
pub mod internal;
pub mod promotion;

use thiserror::Error;

use crate::error::{
    command::CommandError, config::ConfigError, internal::InternalError,
    promotion::PromotionError,
};

/// Generic reply shown when an operation fails for reasons the user cannot fix.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred while processing that request.";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the bot. Most variants use
/// `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Promotion lifecycle validation failure.
    ///
    /// The message is shown to the invoking user as-is.
    #[error(transparent)]
    PromotionErr(#[from] PromotionError),

    /// Chat command could not be parsed.
    #[error(transparent)]
    CommandErr(#[from] CommandError),

    /// Internal issue indicating a bug or corrupted record.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Stats snapshot could not be serialized or read back.
    #[error(transparent)]
    SerdeErr(#[from] serde_json::Error),

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    BadRequest(String),
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
    /// Returns the text to show the user in Discord for this error.
    ///
    /// Validation failures are returned verbatim. Anything else is logged with its full
    /// detail and replaced with `GENERIC_ERROR_MESSAGE` so internals never leak into chat.
    pub fn user_message(&self) -> String {
        match self {
            Self::PromotionErr(err) => err.to_string(),
            Self::CommandErr(err) => err.to_string(),
            Self::NotFound(msg) | Self::BadRequest(msg) => msg.clone(),
            err => {
                tracing::error!("{}", err);
                GENERIC_ERROR_MESSAGE.to_string()
            }
        }
    }
}
