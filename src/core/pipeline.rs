use crate::core::validation::{remaining_chars, Validator};
use crate::domain::model::{ConfirmationView, FormSnapshot};
use crate::domain::ports::{ConfigProvider, Presenter, SubmissionSink};
use crate::utils::error::{Result, RsvpError};
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// Observable pipeline state. `Invalid` and `Success` are momentary outcomes
/// of an attempt; the pipeline always settles back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Validating,
    Submitting,
}

impl PipelineState {
    fn as_u8(self) -> u8 {
        match self {
            PipelineState::Idle => 0,
            PipelineState::Validating => 1,
            PipelineState::Submitting => 2,
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            1 => PipelineState::Validating,
            2 => PipelineState::Submitting,
            _ => PipelineState::Idle,
        }
    }
}

/// The RSVP submission state machine: validates a form snapshot, then hands
/// the collected submission to the sink while the presenter shows a busy
/// control. At most one attempt is in flight; re-entry is rejected.
pub struct RsvpPipeline<P: Presenter, K: SubmissionSink> {
    presenter: P,
    sink: K,
    validator: Validator,
    message_soft_cap: usize,
    in_flight: AtomicBool,
    state: AtomicU8,
}

impl<P: Presenter, K: SubmissionSink> RsvpPipeline<P, K> {
    pub fn new(presenter: P, sink: K, config: &impl ConfigProvider) -> Self {
        Self {
            presenter,
            sink,
            validator: Validator::new(config.attendance_groups()),
            message_soft_cap: config.message_soft_cap(),
            in_flight: AtomicBool::new(false),
            state: AtomicU8::new(PipelineState::Idle.as_u8()),
        }
    }

    pub fn state(&self) -> PipelineState {
        PipelineState::from_u8(self.state.load(Ordering::Acquire))
    }

    fn set_state(&self, next: PipelineState) {
        tracing::debug!("pipeline state -> {:?}", next);
        self.state.store(next.as_u8(), Ordering::Release);
    }

    /// Runs one submission attempt. Validation failure is a normal outcome
    /// (`RsvpError::Validation`), a sink fault is reported distinctly
    /// (`RsvpError::SubmissionFault`), and a second call while an attempt is
    /// in flight is rejected (`RsvpError::InFlight`). Every path settles the
    /// pipeline back to `Idle` with the control re-enabled.
    pub async fn submit(&self, snapshot: &FormSnapshot) -> Result<ConfirmationView> {
        if self.in_flight.swap(true, Ordering::AcqRel) {
            tracing::warn!("submit ignored: an attempt is already in flight");
            return Err(RsvpError::InFlight);
        }

        let outcome = self.run_attempt(snapshot).await;
        self.set_state(PipelineState::Idle);
        self.in_flight.store(false, Ordering::Release);
        outcome
    }

    async fn run_attempt(&self, snapshot: &FormSnapshot) -> Result<ConfirmationView> {
        self.set_state(PipelineState::Validating);

        let remaining = remaining_chars(&snapshot.message, self.message_soft_cap);
        if remaining < 0 {
            tracing::debug!("message exceeds soft cap by {} characters", -remaining);
        }

        let submission = match self.validator.validate(snapshot) {
            Ok(submission) => submission,
            Err(errors) => {
                tracing::info!(
                    "validation failed on {} field(s), first: {:?}",
                    errors.len(),
                    errors.first_field()
                );
                self.presenter.show_errors(&errors);
                return Err(RsvpError::Validation(errors));
            }
        };

        // Validation fully completed; the control stays disabled for the
        // whole delivery window.
        self.set_state(PipelineState::Submitting);
        self.presenter.set_busy(true);
        let delivered = self.sink.deliver(&submission).await;
        self.presenter.set_busy(false);

        match delivered {
            Ok(()) => {
                let view = ConfirmationView::for_submission(&submission);
                self.presenter.clear_form();
                self.presenter.show_confirmation(&view);
                tracing::info!("RSVP submitted for {}", submission.guest_name);
                Ok(view)
            }
            Err(e) => {
                tracing::error!("submission sink failed: {}", e);
                Err(RsvpError::SubmissionFault {
                    message: e.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Attendance, RsvpSubmission, ValidationErrors};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    struct TestConfig {
        groups: Vec<String>,
    }

    impl TestConfig {
        fn single() -> Self {
            Self {
                groups: vec!["ceremony".to_string()],
            }
        }
    }

    impl ConfigProvider for TestConfig {
        fn attendance_groups(&self) -> &[String] {
            &self.groups
        }

        fn message_soft_cap(&self) -> usize {
            500
        }

        fn submit_latency_ms(&self) -> u64 {
            0
        }
    }

    #[derive(Clone, Default)]
    struct NullPresenter {
        busy_calls: Arc<Mutex<Vec<bool>>>,
    }

    impl Presenter for NullPresenter {
        fn set_busy(&self, busy: bool) {
            self.busy_calls.lock().unwrap().push(busy);
        }
        fn show_errors(&self, _errors: &ValidationErrors) {}
        fn show_confirmation(&self, _view: &ConfirmationView) {}
        fn clear_form(&self) {}
    }

    struct FailingSink;

    #[async_trait]
    impl SubmissionSink for FailingSink {
        async fn deliver(&self, _submission: &RsvpSubmission) -> Result<()> {
            Err(RsvpError::SubmissionFault {
                message: "sink exploded".to_string(),
            })
        }
    }

    fn valid_snapshot() -> FormSnapshot {
        let mut snapshot = FormSnapshot {
            name: "Anika Roy".to_string(),
            email: "anika@example.com".to_string(),
            ..Default::default()
        };
        snapshot.select("ceremony", Attendance::Attending);
        snapshot
    }

    #[tokio::test]
    async fn test_fault_reenables_control_and_returns_to_idle() {
        let presenter = NullPresenter::default();
        let busy_calls = presenter.busy_calls.clone();
        let pipeline = RsvpPipeline::new(presenter, FailingSink, &TestConfig::single());

        let result = pipeline.submit(&valid_snapshot()).await;
        assert!(matches!(result, Err(RsvpError::SubmissionFault { .. })));
        assert_eq!(pipeline.state(), PipelineState::Idle);
        assert_eq!(*busy_calls.lock().unwrap(), vec![true, false]);
    }

    #[tokio::test]
    async fn test_validation_failure_never_toggles_busy() {
        let presenter = NullPresenter::default();
        let busy_calls = presenter.busy_calls.clone();
        let pipeline = RsvpPipeline::new(presenter, FailingSink, &TestConfig::single());

        let result = pipeline.submit(&FormSnapshot::default()).await;
        assert!(matches!(result, Err(RsvpError::Validation(_))));
        assert!(busy_calls.lock().unwrap().is_empty());
        assert_eq!(pipeline.state(), PipelineState::Idle);
    }
}
