//! Trait abstraction for the authentication action to enable mocking in tests

use super::{AuthError, Credentials};
use async_trait::async_trait;

/// External authentication capability.
///
/// Each call settles exactly once, either `Ok(())` or an [`AuthError`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Verify a credentials snapshot
    async fn authenticate(&self, credentials: Credentials) -> Result<(), AuthError>;

    /// Ask for a password-reset message to be sent to `email`
    async fn request_reset(&self, email: String) -> Result<(), AuthError>;
}
