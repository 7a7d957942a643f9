pub mod pipeline;
pub mod validation;

pub use crate::domain::model::{FormSnapshot, RsvpSubmission, ValidationErrors};
pub use crate::domain::ports::{ConfigProvider, Presenter, SubmissionSink};
pub use crate::utils::error::Result;
