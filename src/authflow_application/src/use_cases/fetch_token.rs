use authflow_core::{AccessToken, AuthenticationError, Credentials, HttpTransport, Request};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

pub(crate) const AUTH_PATH: &str = "/auth";

/// Exchanges credentials for an access token via `POST /auth`.
pub struct FetchTokenUseCase<'a, T: HttpTransport> {
    transport: &'a T,
}

impl<'a, T: HttpTransport> FetchTokenUseCase<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    #[tracing::instrument(
        name = "FetchTokenUseCase::fetch",
        skip_all,
        fields(username = %credentials.username())
    )]
    pub async fn fetch(&self, credentials: &Credentials) -> Result<AccessToken, AuthenticationError> {
        let body = serde_json::to_vec(&TokenRequest {
            username: credentials.username(),
            password: credentials.password().expose_secret(),
        })?;

        let response = self.transport.send(Request::post(AUTH_PATH, body)).await?;
        if !response.is_success() {
            return Err(AuthenticationError::Rejected(response.status));
        }

        let token: TokenResponse = serde_json::from_slice(&response.body)?;
        Ok(AccessToken::from(token.access_token))
    }
}

#[derive(Serialize)]
struct TokenRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    access_token: Secret<String>,
    /// Returned by the endpoint alongside the access token; not consumed yet.
    #[allow(dead_code)]
    id_token: Secret<String>,
}
