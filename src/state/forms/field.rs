//! Form field value objects

use super::validator::{validate, ValidationResult};
use secrecy::Secret;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The fixed set of fields on the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Email,
    Password,
}

impl FieldName {
    pub const ALL: [FieldName; 2] = [FieldName::Email, FieldName::Password];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
        }
    }

    /// Capitalized name used in labels and messages
    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Password => "Password",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown form field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for FieldName {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(Self::Email),
            "password" => Ok(Self::Password),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// Represents a single form field with its raw value and interaction state
#[derive(Clone)]
pub struct FormField {
    pub name: FieldName,
    pub label: String,
    raw_value: String,
    touched: bool,
    /// Rendered masked
    pub is_secret: bool,
}

impl FormField {
    /// Create an empty, untouched field
    pub fn new(name: FieldName, is_secret: bool) -> Self {
        Self {
            name,
            label: name.label().to_string(),
            raw_value: String::new(),
            touched: false,
            is_secret,
        }
    }

    pub fn value(&self) -> &str {
        &self.raw_value
    }

    /// Replace the raw value. Does not affect `touched`.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.raw_value = value.into();
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.raw_value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.raw_value.pop();
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn touch(&mut self) {
        self.touched = true;
    }

    pub fn validation(&self) -> ValidationResult {
        validate(self.name, &self.raw_value)
    }

    pub fn is_valid(&self) -> bool {
        self.validation().is_valid()
    }

    /// Message for the highest-priority failing rule, shown only once touched
    pub fn error_message(&self) -> String {
        if !self.touched {
            return String::new();
        }
        self.validation()
            .first_failure()
            .map(|rule| rule.message(self.name))
            .unwrap_or_default()
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        if self.is_secret {
            "•".repeat(self.raw_value.chars().count())
        } else {
            self.raw_value.clone()
        }
    }
}

impl fmt::Debug for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("FormField");
        debug.field("name", &self.name).field("label", &self.label);
        if self.is_secret {
            debug.field("raw_value", &Secret::new(self.raw_value.clone()));
        } else {
            debug.field("raw_value", &self.raw_value);
        }
        debug
            .field("touched", &self.touched)
            .field("is_secret", &self.is_secret)
            .finish()
    }
}
