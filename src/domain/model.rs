use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// One selection from a mutually exclusive attendance group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attendance {
    Attending,
    Declined,
}

impl fmt::Display for Attendance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attendance::Attending => write!(f, "attending"),
            Attendance::Declined => write!(f, "declined"),
        }
    }
}

impl FromStr for Attendance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "attending" => Ok(Attendance::Attending),
            "declined" => Ok(Attendance::Declined),
            other => Err(format!(
                "unknown attendance choice '{}' (expected 'attending' or 'declined')",
                other
            )),
        }
    }
}

/// Raw form-field state at submit time. The pipeline does not own field
/// storage; the caller hands it a snapshot per attempt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormSnapshot {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub guest_count: String,
    /// One entry per attendance group; `None` means nothing selected yet.
    pub attendance: BTreeMap<String, Option<Attendance>>,
    pub dietary: String,
    pub message: String,
}

impl FormSnapshot {
    pub fn select(&mut self, group: &str, choice: Attendance) {
        self.attendance.insert(group.to_string(), Some(choice));
    }
}

/// A validated submission, created per valid attempt and discarded after
/// delivery. `submitted_at` is assigned at collection time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RsvpSubmission {
    pub guest_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub guest_count: Option<u32>,
    pub attendance: BTreeMap<String, Attendance>,
    pub dietary: Option<String>,
    pub message: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// The full batch of failing fields for one attempt, in deterministic order
/// (name, email, then attendance groups in schema order) so a caller can
/// navigate to the first invalid field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn first_field(&self) -> Option<&str> {
        self.errors.first().map(|e| e.field.as_str())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", joined)
    }
}

/// What the presenter renders after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationView {
    pub headline: String,
    pub detail: String,
}

impl ConfirmationView {
    pub fn for_submission(submission: &RsvpSubmission) -> Self {
        let headline = format!(
            "ধন্যবাদ! Thank you, {} — your RSVP has been received.",
            submission.guest_name
        );
        let detail = submission
            .attendance
            .iter()
            .map(|(group, choice)| format!("{}: {}", group, choice))
            .collect::<Vec<_>>()
            .join(", ");
        Self { headline, detail }
    }
}
