//! End-to-end pipeline behavior over a stubbed transport:
//! validation -> API login (token fetch, token hand-off, user fetch) ->
//! interception.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use authflow_application::{ApiAuthenticationUseCase, AuthenticationUseCaseExt};
use authflow_core::{
    AccessToken, AuthenticationError, AuthenticationUseCase, Credentials, HttpTransport, Request,
    Response, TransportError, User,
};

#[derive(Clone)]
struct StubTransport {
    requests: Arc<Mutex<Vec<Request>>>,
    fail_user_fetch: bool,
}

impl StubTransport {
    fn new(fail_user_fetch: bool) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            fail_user_fetch,
        }
    }
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

struct Pipeline {
    use_case: Box<dyn AuthenticationUseCase>,
    stored: Arc<Mutex<Vec<String>>>,
    observed: Arc<Mutex<Vec<User>>>,
    requests: Arc<Mutex<Vec<Request>>>,
}

fn pipeline(fail_user_fetch: bool) -> Pipeline {
    let transport = StubTransport::new(fail_user_fetch);
    let requests = Arc::clone(&transport.requests);

    let stored = Arc::new(Mutex::new(Vec::new()));
    let observed = Arc::new(Mutex::new(Vec::new()));

    let sink_log = Arc::clone(&stored);
    let observer_log = Arc::clone(&observed);
    let use_case = ApiAuthenticationUseCase::new(transport, move |token: &AccessToken| {
        sink_log.lock().unwrap().push(token.expose().to_owned());
    })
    .validated()
    .intercepted(move |user: &User| observer_log.lock().unwrap().push(user.clone()));

    Pipeline {
        use_case: Box::new(use_case),
        stored,
        observed,
        requests,
    }
}

#[tokio::test]
async fn a_successful_login_stores_the_token_and_observes_the_user() {
    let pipeline = pipeline(false);

    let user = pipeline
        .use_case
        .login(Credentials::new("user", "pass"))
        .await
        .unwrap();

    assert_eq!(user, User::new("a@b.com", "A", "B", true));
    assert_eq!(*pipeline.stored.lock().unwrap(), vec!["T1".to_owned()]);
    assert_eq!(*pipeline.observed.lock().unwrap(), vec![user]);
}

#[tokio::test]
async fn a_user_fetch_failure_keeps_the_token_but_is_never_observed() {
    let pipeline = pipeline(true);

    let result = pipeline
        .use_case
        .login(Credentials::new("user", "pass"))
        .await;

    assert!(matches!(result, Err(AuthenticationError::Transport(_))));
    assert_eq!(*pipeline.stored.lock().unwrap(), vec!["T1".to_owned()]);
    assert!(pipeline.observed.lock().unwrap().is_empty());
}

#[tokio::test]
async fn blank_credentials_never_reach_the_transport() {
    let pipeline = pipeline(false);

    let result = pipeline.use_case.login(Credentials::new("   ", "pass")).await;

    assert!(matches!(
        result,
        Err(AuthenticationError::InvalidCredentials)
    ));
    assert!(pipeline.requests.lock().unwrap().is_empty());
    assert!(pipeline.stored.lock().unwrap().is_empty());
    assert!(pipeline.observed.lock().unwrap().is_empty());
}

#[tokio::test]
async fn repeated_logins_are_independent() {
    let pipeline = pipeline(false);

    let first = pipeline
        .use_case
        .login(Credentials::new("user", "pass"))
        .await
        .unwrap();
    let second = pipeline
        .use_case
        .login(Credentials::new("user", "pass"))
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(
        *pipeline.stored.lock().unwrap(),
        vec!["T1".to_owned(), "T1".to_owned()]
    );
    assert_eq!(*pipeline.observed.lock().unwrap(), vec![first, second]);
}
