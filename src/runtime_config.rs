//! # Runtime Configuration Module
//!
//! Environment variable-based configuration for the router's runtime
//! behavior.
//!
//! ## Environment Variables
//!
//! ### `TRIEROUTER_SLOW_MATCH_US`
//!
//! Route matches slower than this many microseconds are logged at `warn`
//! ("Slow route matching detected") instead of `info`. Accepts values in:
//! - Decimal: `1000`
//! - Hexadecimal: `0x3e8`
//!
//! Default: `1000` (1 ms)
//!
//! ## Usage
//!
//! ```rust
//! use trierouter::runtime_config::RuntimeConfig;
//!
//! let config = RuntimeConfig::from_env();
//! println!("Slow match threshold: {:?}", config.slow_match_threshold());
//! ```
//!
//! Logging itself is configured separately, see [`crate::logging`].

use std::env;
use std::time::Duration;

/// Default slow-match threshold in microseconds
pub const DEFAULT_SLOW_MATCH_US: u64 = 1000;

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Slow-match warning threshold in microseconds (default: 1000)
    pub slow_match_us: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            slow_match_us: DEFAULT_SLOW_MATCH_US,
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let slow_match_us = match env::var("TRIEROUTER_SLOW_MATCH_US") {
            Ok(val) => parse_u64(&val).unwrap_or(DEFAULT_SLOW_MATCH_US),
            Err(_) => DEFAULT_SLOW_MATCH_US,
        };
        RuntimeConfig { slow_match_us }
    }

    /// Slow-match threshold as a [`Duration`]
    #[must_use]
    pub fn slow_match_threshold(&self) -> Duration {
        Duration::from_micros(self.slow_match_us)
    }
}

fn parse_u64(val: &str) -> Option<u64> {
    let val = val.trim();
    if let Some(hex) = val.strip_prefix("0x") {
        u64::from_str_radix(hex, 16).ok()
    } else {
        val.parse().ok()
    }
}
