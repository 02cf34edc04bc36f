//! Authentication boundary
//!
//! The login screen never authenticates anything itself. It hands a
//! credentials snapshot to an [`Authenticator`] and waits for the outcome.

mod credentials;
mod error;
mod simulated;
mod traits;

pub use credentials::Credentials;
pub use error::AuthError;
pub use simulated::{SimulatedAuthenticator, DEFAULT_DELAY};
pub use traits::Authenticator;

#[cfg(test)]
pub use traits::MockAuthenticator;
