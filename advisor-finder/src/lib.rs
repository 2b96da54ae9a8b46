//! advisor-finder library interface
//!
//! Screen state, local validation and rendering for the research advisor
//! discovery client. The binary in `main.rs` is a terminal front end over
//! these modules; integration tests drive them against a mock backend.

pub mod api;
pub mod compare;
pub mod explore;
pub mod filters;
pub mod render;
pub mod resources;
pub mod search;
pub mod upload;

#[cfg(test)]
mod test_support;

pub use crate::api::{AdvisorBackend, ApiClient, ApiError, ApiResult};
pub use crate::explore::ActionOutcome;
