use secrecy::{ExposeSecret, Secret};

/// Opaque bearer credential obtained from the identity endpoint.
///
/// Write-only from the pipeline's point of view: it is handed to the
/// configured [`TokenSink`](crate::ports::token_sink::TokenSink) and then
/// used once as an `Authorization` header. `Debug` output is redacted and
/// the token takes no part in equality or display.
#[derive(Debug, Clone)]
pub struct AccessToken(Secret<String>);

impl AccessToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(Secret::new(raw.into()))
    }

    /// Reveal the raw token for transport or persistence use.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<Secret<String>> for AccessToken {
    fn from(raw: Secret<String>) -> Self {
        Self(raw)
    }
}
