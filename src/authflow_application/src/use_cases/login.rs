use async_trait::async_trait;
use authflow_core::{
    AuthenticationError, AuthenticationUseCase, Credentials, HttpTransport, TokenSink, User,
};

use crate::use_cases::{fetch_token::FetchTokenUseCase, fetch_user::FetchUserUseCase};

/// API-backed login: token exchange, token hand-off, profile fetch.
///
/// Blank-credential checking deliberately lives in the validation decorator,
/// not here.
pub struct ApiAuthenticationUseCase<T, S> {
    transport: T,
    token_sink: S,
}

impl<T, S> ApiAuthenticationUseCase<T, S>
where
    T: HttpTransport,
    S: TokenSink,
{
    pub fn new(transport: T, token_sink: S) -> Self {
        Self {
            transport,
            token_sink,
        }
    }
}

#[async_trait]
impl<T, S> AuthenticationUseCase for ApiAuthenticationUseCase<T, S>
where
    T: HttpTransport,
    S: TokenSink,
{
    #[tracing::instrument(
        name = "ApiAuthenticationUseCase::login",
        skip_all,
        fields(username = %credentials.username())
    )]
    async fn login(&self, credentials: Credentials) -> Result<User, AuthenticationError> {
        let token = FetchTokenUseCase::new(&self.transport)
            .fetch(&credentials)
            .await?;

        // Handed off before the profile fetch; a profile-fetch failure must
        // not lose the token.
        self.token_sink.store(&token);

        let user = FetchUserUseCase::new(&self.transport)
            .fetch(&token)
            .await?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use authflow_core::{Request, Response, TransportError};

    use super::*;

    struct StubTransport {
        requests: Arc<Mutex<Vec<Request>>>,
        fail_user_fetch: bool,
    }

    #[async_trait]
    impl HttpTransport for StubTransport {
        async fn send(&self, request: Request) -> Result<Response, TransportError> {
            let path = request.path.clone();
            self.requests.lock().unwrap().push(request);
            match path.as_str() {
                "/auth" => Ok(Response {
                    status: 200,
                    body: br#"{"accessToken":"T1","idToken":"I1"}"#.to_vec(),
                }),
                "/user" if self.fail_user_fetch => {
                    Err(TransportError::Network("connection reset".into()))
                }
                "/user" => Ok(Response {
                    status: 200,
                    body: br#"{
                        "email": "a@b.com",
                        "username": "a",
                        "name": {"firstName": "A", "lastName": "B"},
                        "lastAuthenticated": null
                    }"#
                    .to_vec(),
                }),
                other => panic!("unexpected path {other}"),
            }
        }
    }

    fn use_case(
        fail_user_fetch: bool,
    ) -> (
        ApiAuthenticationUseCase<StubTransport, impl TokenSink>,
        Arc<Mutex<Vec<String>>>,
        Arc<Mutex<Vec<Request>>>,
    ) {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let stored = Arc::new(Mutex::new(Vec::new()));

        let transport = StubTransport {
            requests: Arc::clone(&requests),
            fail_user_fetch,
        };
        let sink_log = Arc::clone(&stored);
        let use_case = ApiAuthenticationUseCase::new(
            transport,
            move |token: &authflow_core::AccessToken| {
                sink_log.lock().unwrap().push(token.expose().to_owned());
            },
        );

        (use_case, stored, requests)
    }

    #[tokio::test]
    async fn fetches_token_stores_it_then_fetches_the_user() {
        let (use_case, stored, requests) = use_case(false);

        let user = use_case.login(Credentials::new("u", "p")).await.unwrap();

        assert_eq!(user, User::new("a@b.com", "A", "B", true));
        assert_eq!(*stored.lock().unwrap(), vec!["T1".to_owned()]);

        let paths: Vec<String> = requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.path.clone())
            .collect();
        assert_eq!(paths, vec!["/auth".to_owned(), "/user".to_owned()]);
    }

    #[tokio::test]
    async fn token_survives_a_user_fetch_failure() {
        let (use_case, stored, _) = use_case(true);

        let result = use_case.login(Credentials::new("u", "p")).await;

        assert!(matches!(result, Err(AuthenticationError::Transport(_))));
        assert_eq!(*stored.lock().unwrap(), vec!["T1".to_owned()]);
    }

    #[tokio::test]
    async fn sink_is_not_invoked_when_the_token_exchange_fails() {
        struct FailingTransport;

        #[async_trait]
        impl HttpTransport for FailingTransport {
            async fn send(&self, _request: Request) -> Result<Response, TransportError> {
                Err(TransportError::Network("no route to host".into()))
            }
        }

        let stored = Arc::new(Mutex::new(Vec::<String>::new()));
        let sink_log = Arc::clone(&stored);
        let use_case = ApiAuthenticationUseCase::new(
            FailingTransport,
            move |token: &authflow_core::AccessToken| {
                sink_log.lock().unwrap().push(token.expose().to_owned());
            },
        );

        let result = use_case.login(Credentials::new("u", "p")).await;

        assert!(matches!(result, Err(AuthenticationError::Transport(_))));
        assert!(stored.lock().unwrap().is_empty());
    }
}
