//! # Nylas Domain
//!
//! Pure types shared by the Nylas request sender.
//!
//! This crate contains:
//! - Credential records (full and partial)
//! - The generic response envelope returned by the Nylas v3 API
//! - Configuration structures
//! - Domain error types and Result definitions
//!
//! ## Architecture
//! - No dependencies on other workspace crates
//! - No I/O; everything here is a data shape

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
