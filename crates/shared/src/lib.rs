//! Shared types, errors, and configuration for the wallet service.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for user and ledger rows
//! - Pagination window resolution and the list response envelope
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, DatabaseConfig, PaginationConfig, ServerConfig};
pub use error::{AppError, AppResult};
