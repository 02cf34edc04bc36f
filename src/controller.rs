//! Submission controller for the login form
//!
//! Gates dispatch on form validity, keeps at most one authentication action
//! outstanding, and applies its settlement back on the event loop.
//!
//! The action runs on a spawned task and reports through an unbounded channel.
//! Settlements are only ever applied by the owner of the controller, via
//! [`SubmissionController::poll_settlements`], so state is mutated from a
//! single place. Dropping the controller drops the receiver; a late settlement
//! is then discarded by the sending task.

use crate::auth::{AuthError, Authenticator};
use crate::state::{FieldName, LoginForm, SubmissionState};
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Result of an external action, delivered back to the event loop
#[derive(Debug)]
pub enum Settlement {
    /// A login attempt finished. `email` is the address that was dispatched.
    Login {
        attempt: Uuid,
        email: String,
        result: Result<(), AuthError>,
    },
    /// A password-reset request finished
    Reset {
        email: String,
        result: Result<(), AuthError>,
    },
}

/// What a call to [`SubmissionController::submit`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Form failed validation; every field is now touched
    Invalid,
    /// An action is already outstanding; nothing dispatched
    AlreadyInFlight,
    Dispatched(Uuid),
}

/// What a call to [`SubmissionController::request_password_reset`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    Dispatched,
    /// A reset request is still outstanding; nothing dispatched
    AlreadyPending,
}

/// What applying a settlement did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettleOutcome {
    Succeeded { email: String },
    Failed(String),
    /// Settlement did not match the outstanding attempt and was ignored
    Stale,
    ResetSent { email: String },
    ResetFailed(AuthError),
}

pub struct SubmissionController {
    authenticator: Arc<dyn Authenticator>,
    state: SubmissionState,
    reset_pending: bool,
    settlement_tx: mpsc::UnboundedSender<Settlement>,
    settlement_rx: mpsc::UnboundedReceiver<Settlement>,
}

impl SubmissionController {
    pub fn new(authenticator: Arc<dyn Authenticator>) -> Self {
        let (settlement_tx, settlement_rx) = mpsc::unbounded_channel();
        Self {
            authenticator,
            state: SubmissionState::default(),
            reset_pending: false,
            settlement_tx,
            settlement_rx,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_reset_pending(&self) -> bool {
        self.reset_pending
    }

    /// Attempt to submit `form`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit(&mut self, form: &mut LoginForm) -> SubmitOutcome {
        if !form.is_valid() {
            form.touch_all();
            let failed: Vec<_> = FieldName::ALL
                .into_iter()
                .filter_map(|name| {
                    let rule = form.field(name).validation().first_failure()?;
                    Some((name, rule))
                })
                .collect();
            tracing::debug!(?failed, "login rejected by validation");
            return SubmitOutcome::Invalid;
        }

        if self.state.is_in_flight() {
            tracing::debug!("login already in flight, ignoring submit");
            return SubmitOutcome::AlreadyInFlight;
        }

        let attempt = Uuid::new_v4();
        self.state.begin(attempt);
        let credentials = form.snapshot();
        let email = credentials.email().to_string();
        tracing::info!(%attempt, %email, "login attempt");

        let authenticator = Arc::clone(&self.authenticator);
        let tx = self.settlement_tx.clone();
        tokio::spawn(async move {
            let result = authenticator.authenticate(credentials).await;
            let settlement = Settlement::Login {
                attempt,
                email,
                result,
            };
            if tx.send(settlement).is_err() {
                tracing::debug!(%attempt, "login settled after controller was dropped");
            }
        });

        SubmitOutcome::Dispatched(attempt)
    }

    /// Apply a settlement to the controller state
    pub fn settle(&mut self, settlement: Settlement) -> SettleOutcome {
        match settlement {
            Settlement::Login {
                attempt,
                email,
                result,
            } => self.settle_login(attempt, email, result),
            Settlement::Reset { email, result } => {
                self.reset_pending = false;
                match result {
                    Ok(()) => {
                        tracing::info!(%email, "password reset sent");
                        SettleOutcome::ResetSent { email }
                    }
                    Err(err) => SettleOutcome::ResetFailed(err),
                }
            }
        }
    }

    fn settle_login(
        &mut self,
        attempt: Uuid,
        email: String,
        result: Result<(), AuthError>,
    ) -> SettleOutcome {
        if self.state.current_attempt() != Some(attempt) {
            tracing::warn!(%attempt, "ignoring stale login settlement");
            return SettleOutcome::Stale;
        }

        match result {
            Ok(()) => {
                tracing::info!(%attempt, "login successful");
                self.state.finish(None);
                SettleOutcome::Succeeded { email }
            }
            Err(err) => {
                let message = err.to_string();
                tracing::info!(%attempt, error = %message, "login failed");
                self.state.finish(Some(message.clone()));
                SettleOutcome::Failed(message)
            }
        }
    }

    /// Apply every settlement that has arrived, without waiting
    pub fn poll_settlements(&mut self) -> Vec<SettleOutcome> {
        let mut outcomes = Vec::new();
        while let Ok(settlement) = self.settlement_rx.try_recv() {
            outcomes.push(self.settle(settlement));
        }
        outcomes
    }

    /// Wait for the next settlement and apply it
    #[cfg(test)]
    pub async fn next_settlement(&mut self) -> Option<SettleOutcome> {
        let settlement = self.settlement_rx.recv().await?;
        Some(self.settle(settlement))
    }

    /// Request a password reset for the email currently in `form`.
    ///
    /// Runs alongside any login attempt; at most one reset is outstanding.
    pub fn request_password_reset(&mut self, form: &LoginForm) -> ResetOutcome {
        if self.reset_pending {
            tracing::debug!("password reset already pending, ignoring request");
            return ResetOutcome::AlreadyPending;
        }

        let email = form.email.value().trim().to_string();
        tracing::info!(%email, "forgot password requested");
        self.reset_pending = true;

        let authenticator = Arc::clone(&self.authenticator);
        let tx = self.settlement_tx.clone();
        tokio::spawn(async move {
            let result = authenticator.request_reset(email.clone()).await;
            if tx.send(Settlement::Reset { email, result }).is_err() {
                tracing::debug!("password reset settled after controller was dropped");
            }
        });

        ResetOutcome::Dispatched
    }
}
