//! Utility functions and helpers
//!
//! ## Modules
//!
//! - [`fmt`] - Human-readable formatting helpers

pub mod fmt;
