use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

/// Steps whose failure is logged but never fails the submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SoftStep {
    ConfirmationEmail,
    SheetAppend,
}

impl SoftStep {
    pub fn label(&self) -> &'static str {
        match self {
            SoftStep::ConfirmationEmail => "confirmation_email",
            SoftStep::SheetAppend => "sheet_append",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SoftFailure {
    pub step: SoftStep,
    pub reason: String,
}

/// Outcome of a submission whose required step succeeded.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReceipt {
    pub received_at: DateTime<Utc>,
    soft_failures: Vec<SoftFailure>,
}

impl SubmissionReceipt {
    pub fn new(received_at: DateTime<Utc>) -> Self {
        Self {
            received_at,
            soft_failures: Vec::new(),
        }
    }

    /// Record the result of an optional step, swallowing and logging its error.
    pub(crate) fn best_effort<T, E: Display>(
        &mut self,
        step: SoftStep,
        result: Result<T, E>,
    ) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(step = step.label(), error = %err, "best-effort step failed");
                self.soft_failures.push(SoftFailure {
                    step,
                    reason: err.to_string(),
                });
                None
            }
        }
    }

    pub fn soft_failures(&self) -> &[SoftFailure] {
        &self.soft_failures
    }

    pub fn failed(&self, step: SoftStep) -> bool {
        self.soft_failures.iter().any(|failure| failure.step == step)
    }

    /// True when every optional step also completed.
    pub fn fully_recorded(&self) -> bool {
        self.soft_failures.is_empty()
    }
}
