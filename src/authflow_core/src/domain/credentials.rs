use std::fmt;

use secrecy::{ExposeSecret, Secret};

/// Transient username/password pair handed to
/// [`AuthenticationUseCase::login`](crate::AuthenticationUseCase::login).
///
/// Consumed by the call and never persisted. The password is wrapped in
/// [`Secret`] and redacted from `Debug` output.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: Secret<String>,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Secret::new(password.into()),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &Secret<String> {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
