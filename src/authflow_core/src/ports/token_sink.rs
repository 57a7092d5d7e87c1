use crate::domain::token::AccessToken;

/// Callback port invoked with each freshly fetched access token.
///
/// Invoked after the token exchange and before the profile fetch, so the
/// token survives a profile-fetch failure. Failures inside the sink are not
/// observable to the pipeline.
pub trait TokenSink: Send + Sync {
    fn store(&self, token: &AccessToken);
}

impl<F> TokenSink for F
where
    F: Fn(&AccessToken) + Send + Sync,
{
    fn store(&self, token: &AccessToken) {
        self(token)
    }
}
