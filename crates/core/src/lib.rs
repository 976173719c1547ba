//! Core types and configuration for the portfolio-screener system.
//!
//! This crate provides shared types used across all other crates:
//! - Trade record and risk category types
//! - Run configuration structures
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use config::{ParseErrorPolicy, RunConfig};
pub use error::{Error, ParseError, Result};
pub use types::*;
