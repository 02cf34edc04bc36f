//! Login form state: the email and password fields plus keyboard focus

use super::field::{FieldName, FormField};
use crate::auth::Credentials;
use secrecy::Secret;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Focusable rows of the login screen, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginRow {
    Email,
    Password,
    SignIn,
    ForgotPassword,
}

impl LoginRow {
    fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Email,
            1 => Self::Password,
            2 => Self::SignIn,
            _ => Self::ForgotPassword,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: FormField,
    pub password: FormField,
    pub active_field_index: usize,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            email: FormField::new(FieldName::Email, false),
            password: FormField::new(FieldName::Password, true),
            active_field_index: 0,
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
        }
    }

    pub fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::Email => &mut self.email,
            FieldName::Password => &mut self.password,
        }
    }

    pub fn set_value(&mut self, name: FieldName, value: impl Into<String>) {
        self.field_mut(name).set_value(value);
    }

    /// Mark every field as touched so validation messages become visible
    pub fn touch_all(&mut self) {
        for name in FieldName::ALL {
            self.field_mut(name).touch();
        }
    }

    pub fn is_valid(&self) -> bool {
        FieldName::ALL.iter().all(|name| self.field(*name).is_valid())
    }

    /// Visible error message for `name`; empty when untouched or valid
    pub fn error_message(&self, name: FieldName) -> String {
        self.field(name).error_message()
    }

    /// Immutable copy of the current values for dispatch
    pub fn snapshot(&self) -> Credentials {
        Credentials::new(
            self.email.value(),
            Secret::new(self.password.value().to_string()),
        )
    }

    pub fn focused_row(&self) -> LoginRow {
        LoginRow::from_index(self.active_field_index)
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for LoginForm {
    fn field_count(&self) -> usize {
        4 // email, password, sign in, forgot password
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        let index = index.min(3);
        if index != self.active_field_index {
            // Leaving a text field is a blur
            if let Some(field) = self.get_active_field_mut() {
                field.touch();
            }
        }
        self.active_field_index = index;
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.email),
            1 => Some(&mut self.password),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.email),
            1 => Some(&self.password),
            // Indices 2 and 3 are buttons
            _ => None,
        }
    }
}
