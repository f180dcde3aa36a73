//! Main application modules.
//!
//! This module provides shutdown handling and statistics printing used by the
//! run loop.

pub mod shutdown;
pub mod statistics;

// Re-export public API
pub use shutdown::shutdown_signal;
pub use statistics::{print_error_statistics, print_run_summary};
