use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{credentials::Credentials, user::User};
use crate::ports::transport::TransportError;

/// Single error surface of the login pipeline.
///
/// Layers that do not fail themselves forward the inner error unchanged;
/// nothing is swallowed or retried here.
#[derive(Debug, Error)]
pub enum AuthenticationError {
    /// Raised only by the validation decorator, before any network call.
    #[error("username or password is invalid")]
    InvalidCredentials,
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// Malformed or undecodable identity response (also wraps request
    /// encoding failures, so callers never see a raw serializer error).
    #[error("undecodable identity response: {0}")]
    Decode(#[from] serde_json::Error),
    /// The identity endpoint answered outside the 2xx range.
    #[error("identity endpoint rejected the request with status {0}")]
    Rejected(u16),
}

/// The login capability.
///
/// Implementations are polymorphic over this single operation: the
/// API-backed base operation and the decorators all implement it, and each
/// decorator wraps exactly one inner operation of the same capability.
/// Callers depend on the capability, never on a concrete variant.
#[async_trait]
pub trait AuthenticationUseCase: Send + Sync {
    async fn login(&self, credentials: Credentials) -> Result<User, AuthenticationError>;
}
