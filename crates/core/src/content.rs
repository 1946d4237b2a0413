//! Content-level value types and validation plumbing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lifecycle bucket a portfolio project is shown under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    #[default]
    Future,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Completed,
        ProjectStatus::InProgress,
        ProjectStatus::Future,
    ];

    /// Value stored in the `portfolio_projects.status` column.
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Completed => "completed",
            ProjectStatus::InProgress => "in_progress",
            ProjectStatus::Future => "future",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid project status '{s}'. Expected one of: completed, in_progress, future"
                ))
            })
    }
}

impl TryFrom<String> for ProjectStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Flatten `validator` errors into a single human-readable message.
///
/// Fields are sorted so the message is stable across runs.
pub fn validation_message(errors: &validator::ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let reasons: Vec<String> = errs
                .iter()
                .map(|e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => e.code.to_string(),
                })
                .collect();
            format!("{field}: {}", reasons.join(", "))
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

/// Run `validator` checks and convert failures into [`CoreError::Validation`].
pub fn validate<T: validator::Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(validation_message(&errors)))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use validator::Validate;

    use super::*;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, max = 5))]
        title: String,
        #[validate(email)]
        email: Option<String>,
    }

    #[test]
    fn status_round_trips_through_column_value() {
        for status in ProjectStatus::ALL {
            assert_eq!(status.as_str().parse::<ProjectStatus>().unwrap(), status);
        }
    }

    #[test]
    fn unknown_status_is_validation_error() {
        assert_matches!("archived".parse::<ProjectStatus>(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn status_defaults_to_future() {
        assert_eq!(ProjectStatus::default(), ProjectStatus::Future);
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&ProjectStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }

    #[test]
    fn validate_passes_valid_input() {
        let ok = Sample {
            title: "abc".into(),
            email: Some("someone@example.com".into()),
        };
        assert!(validate(&ok).is_ok());
    }

    #[test]
    fn validate_reports_every_failing_field() {
        let bad = Sample {
            title: "much too long".into(),
            email: Some("not-an-email".into()),
        };
        let err = validate(&bad).unwrap_err();
        let CoreError::Validation(msg) = err else {
            panic!("expected validation error");
        };
        assert!(msg.contains("email"), "message was: {msg}");
        assert!(msg.contains("title"), "message was: {msg}");
    }
}
