//! Configuration and storage for hacker-stories
//!
//! This crate provides:
//! - Directory and file path utilities
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)
//! - A persisted key/value text store

pub mod app_config;
pub mod config_file;
pub mod paths;
pub mod storage;

pub use app_config::AppConfig;
pub use config_file::load_config_file;
pub use paths::{cache_dir, config_dir};
pub use storage::{FileTextStore, MemoryTextStore, TextStore};
