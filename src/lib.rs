// Library exports for the ETL binary and integration tests

pub mod api;
pub mod config;
pub mod errors;
pub mod graphql;
pub mod services;
pub mod stores;
pub mod types;
