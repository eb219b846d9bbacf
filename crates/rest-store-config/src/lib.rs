//! Configuration for rest-store
//!
//! This crate provides:
//! - Config and cache directory helpers
//! - Configuration file discovery (TOML)
//! - Application configuration (AppConfig) with environment overrides

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::{AppConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use config_file::load_config_file;
pub use paths::{app_config_path, cache_dir, config_dir};
