//! Error type definitions.
//!
//! This module defines the initialization errors and the error, warning, and info
//! categories counted while inspecting domains.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
///
/// Any of these aborts the run before the first domain is inspected.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client used to talk to the driver.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The browser driver process could not be started or never became ready.
    #[error("Browser driver initialization error: {0}")]
    DriverError(String),
}

/// Terminal per-domain failures.
///
/// Each of these ends processing for one domain and is recorded on its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(clippy::enum_variant_names)]
pub enum ErrorType {
    WhoisQueryError,
    BrowserNavigateError,
    BrowserTitleError,
    BrowserScreenshotError,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::WhoisQueryError => "WHOIS query error",
            ErrorType::BrowserNavigateError => "Browser navigation error",
            ErrorType::BrowserTitleError => "Browser title error",
            ErrorType::BrowserScreenshotError => "Browser screenshot error",
        }
    }
}

/// Non-fatal per-domain conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum WarningType {
    /// Registered, but the hostname does not resolve
    DnsLookupFailed,
    /// Registered, but WHOIS gave no creation date
    MissingCreationDate,
}

impl WarningType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::DnsLookupFailed => "DNS lookup failed",
            WarningType::MissingCreationDate => "Missing creation date",
        }
    }
}

/// Outcomes worth counting that are neither errors nor warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    DomainAvailable,
    DomainRegistered,
    PageCaptured,
}

impl InfoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::DomainAvailable => "Domain available",
            InfoType::DomainRegistered => "Domain registered",
            InfoType::PageCaptured => "Page captured",
        }
    }
}
