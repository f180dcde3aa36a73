//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of a run:
//! - Logger
//! - DNS resolver
//! - HTTP client for the browser driver

mod client;
mod logger;
mod resolver;

// Re-export public API
pub use client::init_driver_client;
pub use logger::init_logger_with;
pub use resolver::init_resolver;
