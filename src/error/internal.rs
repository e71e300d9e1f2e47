use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// An interaction arrived outside of a guild where one is required.
    #[error("Interaction {0} was not sent from a guild")]
    MissingGuild(String),

    /// A modal submission did not contain an expected input field.
    #[error("Modal submission is missing the '{0}' field")]
    MissingModalField(String),
}
