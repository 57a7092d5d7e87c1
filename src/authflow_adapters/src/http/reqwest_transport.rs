use async_trait::async_trait;
use authflow_core::{HttpTransport, Method, Request, Response, TransportError};
use reqwest::{Client, Url};
use thiserror::Error;

/// [`HttpTransport`] backed by a shared [`reqwest::Client`].
///
/// Request paths are joined onto the configured base URL. No retry or
/// timeout policy beyond what the supplied client carries.
pub struct ReqwestTransport {
    client: Client,
    base_url: Url,
}

#[derive(Debug, Error)]
#[error("invalid base url: {0}")]
pub struct InvalidBaseUrl(String);

impl ReqwestTransport {
    pub fn new(base_url: &str, client: Client) -> Result<Self, InvalidBaseUrl> {
        let base_url = Url::parse(base_url).map_err(|e| InvalidBaseUrl(e.to_string()))?;
        Ok(Self { client, base_url })
    }

    /// Transport over a default client.
    pub fn from_base_url(base_url: &str) -> Result<Self, InvalidBaseUrl> {
        Self::new(base_url, Client::new())
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[tracing::instrument(
        name = "ReqwestTransport::send",
        skip_all,
        fields(method = request.method.as_str(), path = %request.path)
    )]
    async fn send(&self, request: Request) -> Result<Response, TransportError> {
        let url = self
            .base_url
            .join(&request.path)
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let mut builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(classify)?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(classify)?.to_vec();

        Ok(Response { status, body })
    }
}

fn classify(error: reqwest::Error) -> TransportError {
    if error.is_decode() {
        TransportError::NotHttp
    } else {
        TransportError::Network(error.to_string())
    }
}
