use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("authentication error: {0}")]
    Authentication(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Name of the error kind as shown to the user, `None` outside the sync taxonomy.
    pub fn kind(&self) -> Option<&'static str> {
        match self {
            AppError::Authentication(_) => Some("AuthenticationError"),
            AppError::Validation(_) => Some("ValidationError"),
            AppError::Network(_) => Some("NetworkError"),
            AppError::Configuration(_) => Some("ConfigError"),
            AppError::Io(_) | AppError::Prompt(_) => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AppError::Authentication(_) => "The stored API key is invalid or has expired.",
            AppError::Validation(_) => "The provided JSON file does not match the expected schema.",
            AppError::Network(_) => {
                "A network error occurred while communicating with the Linear API."
            }
            AppError::Configuration(_) => "Configuration is missing or invalid.",
            AppError::Io(_) => "An I/O error occurred.",
            AppError::Prompt(_) => "The interactive prompt failed.",
        }
    }

    /// Raw underlying cause.
    pub fn details(&self) -> String {
        match self {
            AppError::Authentication(details)
            | AppError::Validation(details)
            | AppError::Network(details)
            | AppError::Configuration(details) => details.clone(),
            AppError::Io(err) => err.to_string(),
            AppError::Prompt(err) => err.to_string(),
        }
    }

    pub fn troubleshooting(&self) -> Option<&'static str> {
        match self {
            AppError::Authentication(_) => Some(
                "Run 'linear-sync reset' and then 'linear-sync init' to re-enter your credentials.",
            ),
            AppError::Validation(_) => Some(
                "Check that your JSON file matches the required schema. See the documentation for the expected format.",
            ),
            AppError::Network(_) => Some("Check your internet connection and try again."),
            AppError::Configuration(_) => {
                Some("Run 'linear-sync init' to set up your configuration.")
            }
            AppError::Io(_) | AppError::Prompt(_) => None,
        }
    }
}
