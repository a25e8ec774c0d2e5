//! Shared types, errors, and configuration for livingcost.
//!
//! This crate provides common types used across all other crates:
//! - Currency codes and money display
//! - Application-wide error taxonomy
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use types::{CurrencyCode, Money};
