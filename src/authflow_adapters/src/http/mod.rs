pub mod reqwest_transport;

pub use reqwest_transport::{InvalidBaseUrl, ReqwestTransport};
