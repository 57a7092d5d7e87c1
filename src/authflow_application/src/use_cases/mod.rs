pub mod fetch_token;
pub mod fetch_user;
pub mod login;

pub use fetch_token::FetchTokenUseCase;
pub use fetch_user::FetchUserUseCase;
pub use login::ApiAuthenticationUseCase;
