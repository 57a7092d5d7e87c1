//! # authflow - Client-Side Authentication Pipeline
//!
//! This is a facade crate that re-exports all public APIs from the authflow
//! components. Use this crate to get access to the whole pipeline in one
//! place.
//!
//! ## Structure
//!
//! - **Core domain types**: `User`, `Credentials`, `AccessToken`
//! - **Ports**: `AuthenticationUseCase`, `HttpTransport`, `SecureStorage`, `TokenSink`
//! - **Use cases**: `ApiAuthenticationUseCase`, `FetchTokenUseCase`, `FetchUserUseCase`
//! - **Decorators**: `ValidatedAuthenticationUseCase`, `InterceptedAuthenticationUseCase`
//! - **Adapters**: `ReqwestTransport`, `InMemorySecureStorage`, `Settings`
//! - **Client**: `AuthClient` - the composition root

// ============================================================================
// Core Domain Types and Ports
// ============================================================================

/// Core domain types and port traits
pub mod core {
    pub use authflow_core::*;
}

// Re-export most commonly used core types at the root level
pub use authflow_core::{
    AccessToken, AuthenticationError, AuthenticationUseCase, Credentials, HttpTransport, Method,
    Request, Response, SecureStorage, TokenSink, TransportError, User,
};

// ============================================================================
// Use Cases and Decorators (Application Layer)
// ============================================================================

/// Application use cases and decorators
pub mod use_cases {
    pub use authflow_application::*;
}

// Re-export use cases at root level
pub use authflow_application::{
    ApiAuthenticationUseCase, AuthenticationUseCaseExt, FetchTokenUseCase, FetchUserUseCase,
    InterceptedAuthenticationUseCase, ValidatedAuthenticationUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP transport implementations
    pub mod http {
        pub use authflow_adapters::http::*;
    }

    /// Secure storage implementations
    pub mod storage {
        pub use authflow_adapters::storage::*;
    }

    /// Configuration
    pub mod config {
        pub use authflow_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use authflow_adapters::{InMemorySecureStorage, InvalidBaseUrl, ReqwestTransport, Settings};

// ============================================================================
// Client (Composition Root)
// ============================================================================

pub use authflow_client::{AuthClient, telemetry};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
