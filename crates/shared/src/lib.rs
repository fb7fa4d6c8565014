//! Shared types, errors, and configuration for Centum.
//!
//! This crate provides the leaf types every other crate builds on:
//! - `Amount`, an integer quantity of minor units
//! - `Currency`, an immutable currency descriptor
//! - `MoneyError`, the error type for all money operations
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{MoneyError, MoneyResult};
pub use types::{Amount, Currency};
