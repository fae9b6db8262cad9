//! Core types and shared functionality for cupdash.
//!
//! This crate provides:
//! - The finals data model and the immutable dataset built at startup
//! - Name normalization and win aggregation
//! - Dashboard lookups shared by the HTTP, MCP and CLI front ends
//! - Unified error types
//! - Configuration structures

pub mod aggregate;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod model;
pub mod normalize;

pub use aggregate::count_wins;
pub use config::{AppConfig, ConfigError, ServeMode};
pub use error::Error;
pub use model::{CountryWinCount, Dataset, FinalRecord};
pub use normalize::normalize_records;
