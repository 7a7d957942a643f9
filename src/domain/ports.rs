use crate::domain::model::{ConfirmationView, RsvpSubmission, ValidationErrors};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Presentation collaborator the pipeline reports outcomes to. It never
/// drives the pipeline; it only renders what it is told.
pub trait Presenter: Send + Sync {
    /// Disable (true) or re-enable (false) the submit control.
    fn set_busy(&self, busy: bool);
    /// Render the whole error batch at once.
    fn show_errors(&self, errors: &ValidationErrors);
    fn show_confirmation(&self, view: &ConfirmationView);
    /// Clear all form fields after a successful submission.
    fn clear_form(&self);
}

pub trait ConfigProvider: Send + Sync {
    /// Names of the attendance groups that require a selection.
    fn attendance_groups(&self) -> &[String];
    /// Display-only soft cap for the free-text message.
    fn message_soft_cap(&self) -> usize;
    fn submit_latency_ms(&self) -> u64;
}

/// Reporting boundary: receives the validated submission in place of a real
/// network call. The only operation that may suspend.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn deliver(&self, submission: &RsvpSubmission) -> Result<()>;
}
