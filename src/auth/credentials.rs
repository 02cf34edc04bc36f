//! Credentials snapshot handed to the authenticator

use secrecy::Secret;

/// Email and password captured at the moment a login is dispatched.
///
/// The password stays wrapped until an authenticator exposes it.
#[derive(Debug)]
pub struct Credentials {
    email: String,
    password: Secret<String>,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: Secret<String>) -> Self {
        Self {
            email: email.into(),
            password,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &Secret<String> {
        &self.password
    }
}
