use async_trait::async_trait;
use authflow_core::{AuthenticationError, AuthenticationUseCase, Credentials, User};

/// Invokes an observer with each successful login result.
///
/// The observer sees the user by reference and cannot alter what the caller
/// receives; on failure it is never invoked.
pub struct InterceptedAuthenticationUseCase<U, F> {
    inner: U,
    observer: F,
}

impl<U, F> InterceptedAuthenticationUseCase<U, F> {
    pub fn new(inner: U, observer: F) -> Self {
        Self { inner, observer }
    }
}

#[async_trait]
impl<U, F> AuthenticationUseCase for InterceptedAuthenticationUseCase<U, F>
where
    U: AuthenticationUseCase,
    F: Fn(&User) + Send + Sync,
{
    async fn login(&self, credentials: Credentials) -> Result<User, AuthenticationError> {
        let user = self.inner.login(credentials).await?;
        (self.observer)(&user);
        Ok(user)
    }
}
