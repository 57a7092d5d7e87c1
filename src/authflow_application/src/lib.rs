pub mod decorators;
pub mod use_cases;

pub use decorators::{
    AuthenticationUseCaseExt, InterceptedAuthenticationUseCase, ValidatedAuthenticationUseCase,
};
pub use use_cases::{ApiAuthenticationUseCase, FetchTokenUseCase, FetchUserUseCase};
