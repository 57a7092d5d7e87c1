use std::sync::Arc;

use arc_swap::ArcSwapOption;
use authflow_adapters::{InMemorySecureStorage, InvalidBaseUrl, ReqwestTransport, Settings};
use authflow_application::{ApiAuthenticationUseCase, AuthenticationUseCaseExt};
use authflow_core::{
    AccessToken, AuthenticationError, AuthenticationUseCase, Credentials, HttpTransport,
    SecureStorage, User,
};

/// Entry point for the presentation layer.
///
/// Holds the composed pipeline (validation around the API operation, with
/// interception wrapping the whole chain) and the current-user cell the
/// interception observer writes into.
pub struct AuthClient {
    use_case: Box<dyn AuthenticationUseCase>,
    current_user: Arc<ArcSwapOption<User>>,
}

impl AuthClient {
    /// Compose the pipeline over the given transport and storage. Tokens
    /// are JSON-serialized and persisted under `token_storage_key`.
    pub fn new<T, S>(transport: T, storage: S, token_storage_key: impl Into<String>) -> Self
    where
        T: HttpTransport + 'static,
        S: SecureStorage + 'static,
    {
        let token_storage_key = token_storage_key.into();
        let current_user = Arc::new(ArcSwapOption::empty());

        let sink = move |token: &AccessToken| match serde_json::to_vec(token.expose()) {
            Ok(data) => storage.store(&token_storage_key, &data),
            Err(error) => tracing::warn!(%error, "failed to serialize access token"),
        };

        let observed = Arc::clone(&current_user);
        let use_case = ApiAuthenticationUseCase::new(transport, sink)
            .validated()
            .intercepted(move |user: &User| {
                observed.store(Some(Arc::new(user.clone())));
            });

        Self {
            use_case: Box::new(use_case),
            current_user,
        }
    }

    /// Wire up the reqwest transport and the in-memory storage adapter from
    /// [`Settings`]. Swap in a real keychain via [`AuthClient::new`] for
    /// production use.
    pub fn from_settings(settings: &Settings) -> Result<Self, InvalidBaseUrl> {
        let transport = ReqwestTransport::from_base_url(&settings.base_url)?;
        Ok(Self::new(
            transport,
            InMemorySecureStorage::new(),
            settings.token_storage_key.clone(),
        ))
    }

    /// Run the full login pipeline.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, AuthenticationError> {
        self.use_case
            .login(Credentials::new(username, password))
            .await
    }

    /// The most recently authenticated user, if any.
    pub fn current_user(&self) -> Option<Arc<User>> {
        self.current_user.load_full()
    }
}
