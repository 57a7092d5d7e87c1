pub mod intercept;
pub mod validation;

pub use intercept::InterceptedAuthenticationUseCase;
pub use validation::ValidatedAuthenticationUseCase;

use authflow_core::{AuthenticationUseCase, User};

/// Construction-time composition helpers for the login capability, so a
/// pipeline reads as `api.validated().intercepted(observer)`.
pub trait AuthenticationUseCaseExt: AuthenticationUseCase + Sized {
    /// Gate this operation behind blank-credential validation.
    fn validated(self) -> ValidatedAuthenticationUseCase<Self> {
        ValidatedAuthenticationUseCase::new(self)
    }

    /// Observe every successful login with `observer`.
    fn intercepted<F>(self, observer: F) -> InterceptedAuthenticationUseCase<Self, F>
    where
        F: Fn(&User) + Send + Sync,
    {
        InterceptedAuthenticationUseCase::new(self, observer)
    }
}

impl<U: AuthenticationUseCase> AuthenticationUseCaseExt for U {}
