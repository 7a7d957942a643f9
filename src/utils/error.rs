use crate::domain::model::ValidationErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RsvpError {
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("a submission is already in flight")]
    InFlight,

    #[error("submission fault: {message}")]
    SubmissionFault { message: String },

    #[error("configuration error: {message}")]
    ConfigError { message: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RsvpError>;
