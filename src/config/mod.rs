// Configuration layer - environment-sourced settings, logging and connections

pub mod database;
pub mod logging;
pub mod settings;

pub use settings::{ConfigError, Settings};
