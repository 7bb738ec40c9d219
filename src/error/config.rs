use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable is set but holds an unusable value.
    ///
    /// Check the documentation for the expected format of each configuration
    /// variable.
    #[error("Invalid value for environment variable {0}: {1:?}")]
    InvalidEnvVar(String, String),
}
