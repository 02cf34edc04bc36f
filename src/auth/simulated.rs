//! Stand-in authenticator that accepts every login after a fixed delay

use super::{AuthError, Authenticator, Credentials};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use std::time::Duration;

/// Default simulated round-trip
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// Accepts any credentials after `delay`. There is no backend behind it and
/// no reset-delivery channel.
#[derive(Debug, Clone)]
pub struct SimulatedAuthenticator {
    delay: Duration,
}

impl SimulatedAuthenticator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedAuthenticator {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

#[async_trait]
impl Authenticator for SimulatedAuthenticator {
    async fn authenticate(&self, credentials: Credentials) -> Result<(), AuthError> {
        tracing::debug!(
            email = credentials.email(),
            password_len = credentials.password().expose_secret().chars().count(),
            delay = ?self.delay,
            "simulating login"
        );
        tokio::time::sleep(self.delay).await;
        Ok(())
    }

    async fn request_reset(&self, email: String) -> Result<(), AuthError> {
        tracing::info!(%email, "password reset requested");
        Err(AuthError::NotImplemented("Password reset"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::Secret;
    use tokio_test::{assert_err, assert_ok};

    #[tokio::test(start_paused = true)]
    async fn test_authenticate_succeeds_after_delay() {
        let auth = SimulatedAuthenticator::default();
        let started = tokio::time::Instant::now();
        let result = auth
            .authenticate(Credentials::new("a@b.com", Secret::new("123456".to_string())))
            .await;
        assert_ok!(result);
        assert!(started.elapsed() >= DEFAULT_DELAY);
    }

    #[tokio::test]
    async fn test_request_reset_is_not_implemented() {
        let auth = SimulatedAuthenticator::new(Duration::ZERO);
        let err = assert_err!(auth.request_reset("a@b.com".to_string()).await);
        assert_eq!(err, AuthError::NotImplemented("Password reset"));
    }
}
