//! API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;
use std::net::{IpAddr, SocketAddr};

use receipts_core::{RuleSet, ValidationOptions};
use serde::{Deserialize, Serialize};

/// Receipts API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Bind address
    pub host: IpAddr,

    /// HTTP server port
    pub port: u16,

    /// Award +5 when the total is above 10.00
    pub total_threshold_bonus: bool,

    /// Reject receipts whose total is not the sum of item prices
    pub require_matching_total: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 8080,
            total_threshold_bonus: true,
            require_matching_total: false,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key → value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = ApiConfig::default();

        Ok(ApiConfig {
            host: parse_or(&lookup, "RECEIPTS_HOST", defaults.host)?,
            port: parse_or(&lookup, "RECEIPTS_PORT", defaults.port)?,
            total_threshold_bonus: parse_or(
                &lookup,
                "RECEIPTS_TOTAL_THRESHOLD_BONUS",
                defaults.total_threshold_bonus,
            )?,
            require_matching_total: parse_or(
                &lookup,
                "RECEIPTS_REQUIRE_MATCHING_TOTAL",
                defaults.require_matching_total,
            )?,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn rule_set(&self) -> RuleSet {
        if self.total_threshold_bonus {
            RuleSet::all()
        } else {
            RuleSet::without_total_threshold()
        }
    }

    pub fn validation_options(&self) -> ValidationOptions {
        ValidationOptions {
            require_matching_total: self.require_matching_total,
        }
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(default),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
