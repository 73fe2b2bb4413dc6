use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 8080;

pub struct Config {
    pub database_url: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            port: match std::env::var("PORT") {
                Ok(value) => value
                    .parse()
                    .map_err(|_| ConfigError::InvalidEnvVar("PORT".to_string(), value))?,
                Err(_) => DEFAULT_PORT,
            },
        })
    }
}
