//! Composition root: wires a transport and a storage into the decorated
//! login pipeline and exposes it behind [`AuthClient`].

mod client;
pub mod telemetry;

pub use client::AuthClient;
