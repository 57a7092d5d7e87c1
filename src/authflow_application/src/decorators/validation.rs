use async_trait::async_trait;
use authflow_core::{AuthenticationError, AuthenticationUseCase, Credentials, User};
use secrecy::ExposeSecret;

/// Precondition gate: rejects blank credentials before any network call.
///
/// Stateless; adds nothing on the success path.
pub struct ValidatedAuthenticationUseCase<U> {
    inner: U,
}

impl<U> ValidatedAuthenticationUseCase<U> {
    pub fn new(inner: U) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<U> AuthenticationUseCase for ValidatedAuthenticationUseCase<U>
where
    U: AuthenticationUseCase,
{
    async fn login(&self, credentials: Credentials) -> Result<User, AuthenticationError> {
        if credentials.username().trim().is_empty()
            || credentials.password().expose_secret().is_empty()
        {
            return Err(AuthenticationError::InvalidCredentials);
        }

        // Trimming is only part of the emptiness check; the inner operation
        // receives the username exactly as given.
        self.inner.login(credentials).await
    }
}
