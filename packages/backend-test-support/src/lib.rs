//! Test support for the croupier backend
//!
//! Shared logging initialization and Problem Details assertions for unit and
//! integration tests. Nothing here depends on backend types.

pub mod logging;
pub mod problem_details;
