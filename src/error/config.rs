use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but could not be parsed.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar {
        /// Name of the offending variable
        name: String,
        /// The raw value that failed to parse
        value: String,
    },
}
