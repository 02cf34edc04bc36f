//! Application state definitions

use super::forms::LoginForm;
use std::collections::VecDeque;

/// Everything the login screen renders apart from the submission lifecycle
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub form: LoginForm,
    /// Transient message shown in the status bar
    pub status_message: Option<String>,
    /// Modal errors, shown one at a time, oldest first
    error_queue: VecDeque<String>,
}

impl AppState {
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// Error currently displayed in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}
