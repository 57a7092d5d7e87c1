pub mod config;
pub mod http;
pub mod storage;

pub use self::config::Settings;
pub use self::http::{InvalidBaseUrl, ReqwestTransport};
pub use self::storage::InMemorySecureStorage;
