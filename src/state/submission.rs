//! Submission lifecycle state for the login form

use std::time::Instant;
use uuid::Uuid;

/// Whether a login action is outstanding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    InFlight {
        /// Identifies the dispatched action; settlements for any other id are stale
        attempt: Uuid,
        started_at: Instant,
    },
}

/// In-flight flag plus the form-level error slot
#[derive(Debug, Clone, Default)]
pub struct SubmissionState {
    phase: SubmissionPhase,
    error_message: String,
}

impl SubmissionState {
    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self.phase, SubmissionPhase::InFlight { .. })
    }

    /// Attempt id of the outstanding action, if any
    pub fn current_attempt(&self) -> Option<Uuid> {
        match self.phase {
            SubmissionPhase::InFlight { attempt, .. } => Some(attempt),
            SubmissionPhase::Idle => None,
        }
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Idle -> InFlight. Clears any previous error.
    pub(crate) fn begin(&mut self, attempt: Uuid) {
        self.phase = SubmissionPhase::InFlight {
            attempt,
            started_at: Instant::now(),
        };
        self.error_message.clear();
    }

    /// InFlight -> Idle, recording `error` when the action failed
    pub(crate) fn finish(&mut self, error: Option<String>) {
        self.phase = SubmissionPhase::Idle;
        if let Some(message) = error {
            self.error_message = message;
        }
    }
}
