//! Authentication errors

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The authenticator answered and refused the credentials
    #[error("{0}")]
    Rejected(String),

    /// No external action is wired in for this capability
    #[error("{0} is not available yet")]
    NotImplemented(&'static str),
}
