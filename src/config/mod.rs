pub mod cli;

#[cfg(feature = "cli")]
use crate::domain::model::{Attendance, FormSnapshot};
#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::{Result, RsvpError};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use std::collections::BTreeMap;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "rsvp")]
#[command(about = "Validate and submit a wedding RSVP")]
pub struct CliConfig {
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    #[arg(long, default_value = "")]
    pub guest_count: String,

    /// Attendance selection as group=choice, e.g. --attend ceremony=attending
    #[arg(long = "attend", value_parser = parse_attendance_arg)]
    pub attend: Vec<(String, Attendance)>,

    #[arg(long, default_value = "")]
    pub dietary: String,

    #[arg(long, default_value = "")]
    pub message: String,

    #[arg(long, value_delimiter = ',', default_value = "ceremony,reception")]
    pub attendance_groups: Vec<String>,

    #[arg(long, default_value = "500")]
    pub message_soft_cap: usize,

    #[arg(long, default_value = "1500")]
    pub submit_latency_ms: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
fn parse_attendance_arg(raw: &str) -> std::result::Result<(String, Attendance), String> {
    let (group, choice) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected group=choice, got '{}'", raw))?;
    let group = group.trim();
    if group.is_empty() {
        return Err(format!("missing group name in '{}'", raw));
    }
    Ok((group.to_string(), choice.parse()?))
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn validate(&self) -> Result<()> {
        if self.attendance_groups.is_empty() {
            return Err(RsvpError::ConfigError {
                message: "at least one attendance group is required".to_string(),
            });
        }
        for group in &self.attendance_groups {
            if group.trim().is_empty() {
                return Err(RsvpError::ConfigError {
                    message: "attendance group names cannot be empty".to_string(),
                });
            }
        }
        for (group, _) in &self.attend {
            if !self.attendance_groups.iter().any(|g| g == group) {
                return Err(RsvpError::ConfigError {
                    message: format!(
                        "unknown attendance group '{}' (configured: {})",
                        group,
                        self.attendance_groups.join(", ")
                    ),
                });
            }
        }
        Ok(())
    }

    /// Builds the form snapshot this invocation submits.
    pub fn snapshot(&self) -> FormSnapshot {
        let mut attendance: BTreeMap<String, Option<Attendance>> = self
            .attendance_groups
            .iter()
            .map(|g| (g.clone(), None))
            .collect();
        for (group, choice) in &self.attend {
            attendance.insert(group.clone(), Some(*choice));
        }
        FormSnapshot {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            guest_count: self.guest_count.clone(),
            attendance,
            dietary: self.dietary.clone(),
            message: self.message.clone(),
        }
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn attendance_groups(&self) -> &[String] {
        &self.attendance_groups
    }

    fn message_soft_cap(&self) -> usize {
        self.message_soft_cap
    }

    fn submit_latency_ms(&self) -> u64 {
        self.submit_latency_ms
    }
}
