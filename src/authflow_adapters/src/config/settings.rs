use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Runtime configuration for the authentication client.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Base URL of the identity endpoint.
    pub base_url: String,
    /// Storage key under which the serialized access token is persisted.
    #[serde(default = "default_token_storage_key")]
    pub token_storage_key: String,
}

fn default_token_storage_key() -> String {
    "kAccessToken".to_owned()
}

impl Settings {
    /// Load from an optional `authflow.json` in the working directory, with
    /// `AUTHFLOW_*` environment variables taking precedence. A `.env` file
    /// is honored if present.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Config::builder()
            .add_source(File::with_name("authflow").required(false))
            .add_source(Environment::with_prefix("AUTHFLOW"))
            .build()?
            .try_deserialize()
    }
}
