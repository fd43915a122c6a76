// Services layer - token issuance, verification and request authorization

pub mod access_guard;
pub mod token_service;

pub use access_guard::AccessGuard;
pub use token_service::TokenService;
