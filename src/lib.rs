pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::cli::{ConsolePresenter, LoggingSink};
pub use core::{
    pipeline::{PipelineState, RsvpPipeline},
    validation::Validator,
};
pub use domain::model::{
    Attendance, ConfirmationView, FieldError, FormSnapshot, RsvpSubmission, ValidationErrors,
};
pub use domain::ports::{ConfigProvider, Presenter, SubmissionSink};
pub use utils::error::{Result, RsvpError};
