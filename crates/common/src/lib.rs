//! Shared utilities, configuration, and error handling for Chatline
//!
//! This crate provides common functionality used across the Chatline services:
//! - Configuration management following 12-factor principles
//! - Error types and their HTTP mapping
//! - Repository error vocabulary
//! - Custom axum extractors

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;

pub use config::Config;
pub use db::RepositoryError;
pub use error::{Error, Result};
pub use extractors::{LimitQuery, ValidatedJson};
