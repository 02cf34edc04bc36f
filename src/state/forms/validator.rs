//! Field validation rules for the login form
//!
//! Validation is a pure function of the field name and its raw value. Nothing
//! is cached: callers recompute on demand.

use super::field::FieldName;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Minimum number of characters accepted for a password
pub const PASSWORD_MIN_LENGTH: usize = 6;

const EMAIL_MAX_LENGTH: usize = 254;
const EMAIL_LOCAL_MAX_LENGTH: usize = 64;

/// `local@domain` shape accepted by browser email inputs
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~\-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~\-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is a valid regex")
});

/// A validation rule that a field value can fail.
///
/// Variant order is message priority: when several rules fail, the first one
/// in declaration order is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleKind {
    Required,
    Email,
    MinLength(usize),
}

impl RuleKind {
    /// Human-readable message for this rule failing on `field`
    pub fn message(&self, field: FieldName) -> String {
        match self {
            RuleKind::Required => format!("{} is required", field.label()),
            RuleKind::Email => "Please enter a valid email address".to_string(),
            RuleKind::MinLength(n) => {
                format!("{} must be at least {n} characters long", field.label())
            }
        }
    }
}

/// Outcome of validating a single raw value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    failed: BTreeSet<RuleKind>,
}

impl ValidationResult {
    fn with(rule: RuleKind) -> Self {
        Self {
            failed: BTreeSet::from([rule]),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.failed.is_empty()
    }

    /// Rules that failed, in priority order
    pub fn failed_rules(&self) -> impl Iterator<Item = &RuleKind> {
        self.failed.iter()
    }

    /// Highest-priority failing rule, if any
    pub fn first_failure(&self) -> Option<RuleKind> {
        self.failed_rules().next().copied()
    }
}

/// Validate `raw` against the fixed rules for `field`.
///
/// `Required` short-circuits: an empty value never also reports a shape or
/// length failure.
pub fn validate(field: FieldName, raw: &str) -> ValidationResult {
    if raw.trim().is_empty() {
        return ValidationResult::with(RuleKind::Required);
    }

    match field {
        FieldName::Email if !is_email_shaped(raw) => ValidationResult::with(RuleKind::Email),
        FieldName::Password if raw.chars().count() < PASSWORD_MIN_LENGTH => {
            ValidationResult::with(RuleKind::MinLength(PASSWORD_MIN_LENGTH))
        }
        _ => ValidationResult::default(),
    }
}

fn is_email_shaped(raw: &str) -> bool {
    if raw.len() > EMAIL_MAX_LENGTH {
        return false;
    }
    match raw.find('@') {
        Some(at) if at <= EMAIL_LOCAL_MAX_LENGTH => EMAIL_PATTERN.is_match(raw),
        _ => false,
    }
}
