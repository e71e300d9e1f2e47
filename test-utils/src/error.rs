use thiserror::Error;

/// Errors that can occur while setting up a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// Temporary directory or settings file could not be created.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Settings document could not be serialized.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
