use authflow_core::{AccessToken, AuthenticationError, HttpTransport, Request, User};
use chrono::{DateTime, Utc};
use serde::Deserialize;

pub(crate) const USER_PATH: &str = "/user";

/// Exchanges an access token for the user profile via `GET /user`.
pub struct FetchUserUseCase<'a, T: HttpTransport> {
    transport: &'a T,
}

impl<'a, T: HttpTransport> FetchUserUseCase<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    #[tracing::instrument(name = "FetchUserUseCase::fetch", skip_all)]
    pub async fn fetch(&self, token: &AccessToken) -> Result<User, AuthenticationError> {
        let request = Request::get(USER_PATH)
            .with_header("Authorization", format!("Bearer {}", token.expose()));

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(AuthenticationError::Rejected(response.status));
        }

        let record: UserRecord = serde_json::from_slice(&response.body)?;
        Ok(record.into_user())
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserRecord {
    email: String,
    /// Decoded from the record but not part of the domain profile.
    #[allow(dead_code)]
    username: String,
    name: Name,
    #[serde(default)]
    last_authenticated: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Name {
    first_name: String,
    last_name: String,
}

impl UserRecord {
    fn into_user(self) -> User {
        User::new(
            self.email,
            self.name.first_name,
            self.name.last_name,
            self.last_authenticated.is_none(),
        )
    }
}
