use thiserror::Error;

/// Configuration errors raised while loading environment variables.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing environment variable '{0}'")]
    MissingEnvVar(String),

    /// An environment variable is set but cannot be parsed.
    #[error("Environment variable '{0}' has invalid value '{1}'")]
    InvalidEnvVar(String, String),
}
