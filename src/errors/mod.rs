// Error types - HTTP-facing response enums and internal store errors

pub mod api;
pub mod auth;
pub mod store;

pub use api::ApiError;
pub use auth::AuthError;
pub use store::StoreError;
