//! Company records and their lifecycle status

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Longest company name accepted, in characters
pub const COMPANY_NAME_MAX_LEN: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CompanyStatus {
    Active,
    Inactive,
    Suspended,
}

impl CompanyStatus {
    pub const ALL: [CompanyStatus; 3] = [Self::Active, Self::Inactive, Self::Suspended];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Suspended => "SUSPENDED",
        }
    }
}

impl fmt::Display for CompanyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompanyStatus {
    type Err = CompanyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CompanyError::UnknownStatus(s.to_string()))
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompanyError {
    #[error("unknown company status '{0}'")]
    UnknownStatus(String),

    #[error("company {id} has an empty name")]
    EmptyName { id: u64 },

    #[error("company {id} name is longer than {COMPANY_NAME_MAX_LEN} characters")]
    NameTooLong { id: u64 },

    #[error("company id {0} is listed more than once")]
    DuplicateId(u64),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: u64,
    pub name: String,
    pub status: CompanyStatus,
}

impl Company {
    #[allow(dead_code)] // Records normally arrive through config deserialization
    pub fn new(id: u64, name: impl Into<String>, status: CompanyStatus) -> Self {
        Self {
            id,
            name: name.into(),
            status,
        }
    }

    /// Check the name constraints: present and at most [`COMPANY_NAME_MAX_LEN`] characters
    pub fn validate(&self) -> Result<(), CompanyError> {
        if self.name.trim().is_empty() {
            return Err(CompanyError::EmptyName { id: self.id });
        }
        if self.name.chars().count() > COMPANY_NAME_MAX_LEN {
            return Err(CompanyError::NameTooLong { id: self.id });
        }
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.status == CompanyStatus::Active
    }
}
