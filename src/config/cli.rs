use crate::domain::model::{ConfirmationView, RsvpSubmission, ValidationErrors};
use crate::domain::ports::{Presenter, SubmissionSink};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Console rendering surface for the CLI binary.
#[derive(Debug, Clone, Default)]
pub struct ConsolePresenter;

impl Presenter for ConsolePresenter {
    fn set_busy(&self, busy: bool) {
        if busy {
            println!("⏳ Sending your RSVP... / আপনার আরএসভিপি পাঠানো হচ্ছে...");
        }
        tracing::debug!("submit control busy: {}", busy);
    }

    fn show_errors(&self, errors: &ValidationErrors) {
        eprintln!("❌ Please fix the following before submitting:");
        for error in &errors.errors {
            eprintln!("   {}: {}", error.field, error.message);
        }
        if let Some(first) = errors.first_field() {
            eprintln!("   (start with '{}')", first);
        }
    }

    fn show_confirmation(&self, view: &ConfirmationView) {
        println!("✅ {}", view.headline);
        if !view.detail.is_empty() {
            println!("   {}", view.detail);
        }
    }

    fn clear_form(&self) {
        tracing::debug!("form fields cleared");
    }
}

/// Default reporting sink: sleeps for the configured latency, then records
/// the submission as a JSON line in the diagnostic log. Stands in for a
/// backend endpoint in a production rebuild.
#[derive(Debug, Clone)]
pub struct LoggingSink {
    latency: Duration,
}

impl LoggingSink {
    pub fn new() -> Self {
        Self::with_latency(1500)
    }

    pub fn with_latency(latency_ms: u64) -> Self {
        Self {
            latency: Duration::from_millis(latency_ms),
        }
    }
}

impl Default for LoggingSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubmissionSink for LoggingSink {
    async fn deliver(&self, submission: &RsvpSubmission) -> Result<()> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let record = serde_json::to_string(submission)?;
        tracing::info!("rsvp recorded: {}", record);
        Ok(())
    }
}
