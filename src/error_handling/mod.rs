//! Error handling and processing statistics.
//!
//! This module provides:
//! - Initialization error types
//! - Per-domain outcome categories
//! - Processing statistics tracking
//!
//! Outcome categories are:
//! - **Errors**: a stage failed and the domain was abandoned
//! - **Warnings**: the domain was processed but something was missing
//! - **Info**: how each domain ended up

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{ErrorType, InfoType, InitializationError, WarningType};
