pub mod authentication;
pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{credentials::Credentials, token::AccessToken, user::User};

pub use authentication::{AuthenticationError, AuthenticationUseCase};

pub use ports::{
    storage::SecureStorage,
    token_sink::TokenSink,
    transport::{HttpTransport, Method, Request, Response, TransportError},
};
