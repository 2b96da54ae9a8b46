//! # Advisor Finder Common Library
//!
//! Shared code for the advisor finder client crates:
//! - Wire types exchanged with the discovery backend
//! - Configuration loading and backend URL resolution
//! - Common error type

pub mod api;
pub mod config;
pub mod error;

pub use error::{Error, Result};
