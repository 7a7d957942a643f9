use crate::domain::model::{FieldError, FormSnapshot, RsvpSubmission, ValidationErrors};
use chrono::Utc;
use regex::Regex;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

const NAME_MESSAGE: &str = "Please enter your name (at least 2 characters) / অনুগ্রহ করে আপনার নাম লিখুন";
const EMAIL_MESSAGE: &str = "Please enter a valid email address / একটি সঠিক ইমেইল ঠিকানা দিন";

/// Runs every field rule independently and reports all failures together;
/// never stops at the first failing field.
pub struct Validator {
    email_re: Regex,
    groups: Vec<String>,
}

impl Validator {
    pub fn new(groups: &[String]) -> Self {
        // The pattern is a literal; compilation cannot fail at runtime.
        let email_re = Regex::new(EMAIL_PATTERN).expect("email pattern compiles");
        Self {
            email_re,
            groups: groups.to_vec(),
        }
    }

    /// Promotes a snapshot into a validated submission, or returns the full
    /// batch of field errors. Error order is deterministic: name, email,
    /// then attendance groups in schema order.
    pub fn validate(&self, snapshot: &FormSnapshot) -> Result<RsvpSubmission, ValidationErrors> {
        let mut errors = Vec::new();

        let name = snapshot.name.trim();
        if name.chars().count() < 2 {
            errors.push(FieldError::new("name", NAME_MESSAGE));
        }

        let email = snapshot.email.trim();
        if email.is_empty() || !self.email_re.is_match(email) {
            errors.push(FieldError::new("email", EMAIL_MESSAGE));
        }

        for group in &self.groups {
            let selected = matches!(snapshot.attendance.get(group.as_str()), Some(Some(_)));
            if !selected {
                errors.push(FieldError::new(
                    format!("attendance-{}", group),
                    format!(
                        "Please let us know if you can attend the {} / আপনি {} অনুষ্ঠানে আসবেন কি না জানান",
                        group, group
                    ),
                ));
            }
        }

        if !errors.is_empty() {
            return Err(ValidationErrors { errors });
        }

        let attendance = self
            .groups
            .iter()
            .filter_map(|g| {
                snapshot
                    .attendance
                    .get(g.as_str())
                    .copied()
                    .flatten()
                    .map(|choice| (g.clone(), choice))
            })
            .collect();

        Ok(RsvpSubmission {
            guest_name: name.to_string(),
            email: email.to_string(),
            phone: non_empty(&snapshot.phone),
            guest_count: parse_guest_count(&snapshot.guest_count),
            attendance,
            dietary: non_empty(&snapshot.dietary),
            message: non_empty(&snapshot.message),
            submitted_at: Utc::now(),
        })
    }
}

/// Remaining characters for the display-only message counter. Negative when
/// over the soft cap; overflow is never a validation error.
pub fn remaining_chars(message: &str, soft_cap: usize) -> i64 {
    soft_cap as i64 - message.chars().count() as i64
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// Optional field: unparseable text is dropped rather than rejected.
fn parse_guest_count(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<u32>() {
        Ok(n) => Some(n),
        Err(_) => {
            tracing::debug!("ignoring unparseable guest count: {:?}", trimmed);
            None
        }
    }
}
