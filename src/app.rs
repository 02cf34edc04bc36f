//! Application state and core logic

use crate::auth::{Authenticator, SimulatedAuthenticator};
use crate::company::{CompanyDirectory, CompanyStatus};
use crate::config::TuiConfig;
use crate::controller::{ResetOutcome, SettleOutcome, SubmissionController, SubmitOutcome};
use crate::platform::RESET_MODIFIER;
use crate::state::{AppState, Form, LoginRow, SubmissionState};
use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Owns the in-flight flag and talks to the authenticator
    controller: SubmissionController,
    companies: CompanyDirectory,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App backed by the simulated authenticator
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let companies = CompanyDirectory::new(config.companies.clone())
            .context("invalid company list in config")?;
        tracing::info!(
            total = companies.count(),
            active = companies.count_with_status(CompanyStatus::Active),
            inactive = companies.count_with_status(CompanyStatus::Inactive),
            suspended = companies.count_with_status(CompanyStatus::Suspended),
            "company directory loaded"
        );

        let authenticator = SimulatedAuthenticator::new(config.auth_delay());
        Ok(Self::with_authenticator(Arc::new(authenticator)).with_companies(companies))
    }

    pub fn with_authenticator(authenticator: Arc<dyn Authenticator>) -> Self {
        Self {
            state: AppState::default(),
            controller: SubmissionController::new(authenticator),
            companies: CompanyDirectory::default(),
            quit: false,
        }
    }

    pub fn with_companies(mut self, companies: CompanyDirectory) -> Self {
        self.companies = companies;
        self
    }

    pub fn submission(&self) -> &SubmissionState {
        self.controller.state()
    }

    pub fn is_reset_pending(&self) -> bool {
        self.controller.is_reset_pending()
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        if key.code == KeyCode::Char('r') && key.modifiers.contains(RESET_MODIFIER) {
            self.request_password_reset();
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Enter => match self.state.form.focused_row() {
                LoginRow::Email => self.state.form.next_field(),
                LoginRow::Password | LoginRow::SignIn => self.submit(),
                LoginRow::ForgotPassword => self.request_password_reset(),
            },
            KeyCode::Backspace => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            _ => {}
        }

        Ok(())
    }

    /// Append pasted text to the focused field
    pub fn handle_paste(&mut self, text: &str) {
        if self.state.has_errors() {
            return;
        }
        if let Some(field) = self.state.form.get_active_field_mut() {
            let name = field.name;
            let value = format!("{}{}", field.value(), text.trim_end_matches(['\r', '\n']));
            self.state.form.set_value(name, value);
        }
    }

    /// Submit the login form
    pub fn submit(&mut self) {
        match self.controller.submit(&mut self.state.form) {
            SubmitOutcome::Dispatched(attempt) => {
                tracing::debug!(%attempt, "waiting for login to settle");
                self.state.status_message = Some("Signing in...".to_string());
            }
            SubmitOutcome::Invalid => {
                self.state.status_message = None;
            }
            SubmitOutcome::AlreadyInFlight => {}
        }
    }

    /// Apply any authentication results that arrived since the last tick
    pub fn poll_settlements(&mut self) {
        for outcome in self.controller.poll_settlements() {
            self.apply_settlement(outcome);
        }
    }

    /// Wait for the outstanding login to settle and apply it
    #[cfg(test)]
    pub async fn wait_for_settlement(&mut self) {
        if let Some(outcome) = self.controller.next_settlement().await {
            self.apply_settlement(outcome);
        }
    }

    fn apply_settlement(&mut self, outcome: SettleOutcome) {
        match outcome {
            SettleOutcome::Succeeded { email } => self.on_login_success(&email),
            SettleOutcome::Failed(reason) => {
                // The form renders the controller's error message
                tracing::debug!(%reason, "login failure shown on form");
                self.state.status_message = None;
            }
            SettleOutcome::Stale => {}
            SettleOutcome::ResetSent { email } => {
                self.state.status_message = Some(format!("Password reset email sent to {email}"));
            }
            SettleOutcome::ResetFailed(err) => {
                tracing::warn!(error = %err, "password reset failed");
                self.state.status_message = None;
                self.push_error(err.to_string());
            }
        }
    }

    /// Post-login hook. There is no destination view or session yet, so the
    /// login screen stays up and only reports who signed in.
    fn on_login_success(&mut self, email: &str) {
        let message = match self.companies.count() {
            0 => format!("Signed in as {email}"),
            _ => format!(
                "Signed in as {email} · {} active companies",
                self.companies.active().len()
            ),
        };
        self.state.status_message = Some(message);
    }

    fn request_password_reset(&mut self) {
        match self.controller.request_password_reset(&self.state.form) {
            ResetOutcome::Dispatched => {
                self.state.status_message = Some("Requesting password reset...".to_string());
            }
            ResetOutcome::AlreadyPending => {}
        }
    }
}
