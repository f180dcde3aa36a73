//! Configuration constants.
//!
//! Defaults for the CLI flags plus the fixed parameters of the domain family,
//! the WHOIS protocol and the browser driver.

use std::time::Duration;

/// Suffix appended to the enumeration index (`{n}hats.com`).
pub const DOMAIN_SUFFIX: &str = "hats.com";

/// Hand-picked names listed ahead of the numeric range when enabled.
pub const SPECIAL_CASE_DOMAINS: &[&str] = &["0hats.com", "1hat.com"];

/// First index of the numeric range; `1hat.com` is a special case.
pub const FIRST_INDEX: u32 = 2;

pub const DEFAULT_LARGEST: u32 = 50;
pub const DEFAULT_OUTPUT_PATH: &str = "index.html";
pub const DEFAULT_SERVE_PORT: u16 = 8080;

// Browser automation driver
pub const DEFAULT_DRIVER_PATH: &str = "deps/geckodriver";
/// Must differ from `DEFAULT_SERVE_PORT`.
pub const DEFAULT_DRIVER_PORT: u16 = 4444;
/// How long to wait for the driver's `/status` endpoint to report ready
pub const DRIVER_STARTUP_TIMEOUT: Duration = Duration::from_secs(10);
pub const DRIVER_POLL_INTERVAL: Duration = Duration::from_millis(100);

// Network operation timeouts
/// Per-operation timeout (WHOIS lookup, DNS lookup, page load) in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Registrar search page used in the "available" note.
pub const REGISTER_URL: &str = "https://www.namecheap.com/domains/registration/results/";

// Report date formats (chrono strftime)
pub const FETCH_TIME_FORMAT: &str = "%a %b %-d %H:%M:%S %z %Y";
pub const DATE_FORMAT: &str = "%a %b %-d %Y";
