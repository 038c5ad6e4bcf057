//! Process configuration.
//!
//! Read once at startup and passed down explicitly. Nothing else in the
//! crate reads the environment.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use crate::lookup::LookupConfig;
use crate::maps::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, MapsConfig};

/// Environment variable holding the Maps API key.
pub const API_KEY_VAR: &str = "LUNCH_PLACES_API_KEY";

const BIND_ADDR_VAR: &str = "LUNCH_BIND_ADDR";
const BASE_URL_VAR: &str = "LUNCH_MAPS_BASE_URL";
const TIMEOUT_VAR: &str = "LUNCH_UPSTREAM_TIMEOUT_SECS";
const TARGET_COUNT_VAR: &str = "LUNCH_TARGET_COUNT";
const LOG_LEVEL_VAR: &str = "LUNCH_LOG_LEVEL";

const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 3000));

/// Error loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but cannot be used
    #[error("invalid value for {var}: {value:?} ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Maps API key. `None` means lookups answer with a configuration error.
    pub api_key: Option<String>,

    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Base URL of the Maps web services.
    pub maps_base_url: String,

    /// Timeout for each upstream call, in seconds.
    pub upstream_timeout_secs: u64,

    /// Number of names each lookup returns.
    pub target_count: usize,

    /// Log filter used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration using `get` to read variables.
    ///
    /// Unset and blank variables take their defaults.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |var: &str| {
            get(var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bind_addr = parse_var(BIND_ADDR_VAR, read(BIND_ADDR_VAR))?.unwrap_or(DEFAULT_BIND_ADDR);

        let upstream_timeout_secs =
            parse_var(TIMEOUT_VAR, read(TIMEOUT_VAR))?.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if upstream_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                var: TIMEOUT_VAR,
                value: "0".into(),
                reason: "must be at least 1".into(),
            });
        }

        let target_count = parse_var(TARGET_COUNT_VAR, read(TARGET_COUNT_VAR))?
            .unwrap_or(LookupConfig::default().target_count);
        if target_count == 0 {
            return Err(ConfigError::Invalid {
                var: TARGET_COUNT_VAR,
                value: "0".into(),
                reason: "must be at least 1".into(),
            });
        }

        Ok(Self {
            api_key: read(API_KEY_VAR),
            bind_addr,
            maps_base_url: read(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            upstream_timeout_secs,
            target_count,
            log_level: read(LOG_LEVEL_VAR).unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Maps client settings, if an API key is configured.
    pub fn maps_config(&self) -> Option<MapsConfig> {
        self.api_key.as_ref().map(|key| {
            MapsConfig::new(key.as_str())
                .with_base_url(self.maps_base_url.as_str())
                .with_timeout(self.upstream_timeout_secs)
        })
    }

    /// Lookup settings derived from this configuration.
    pub fn lookup_config(&self) -> LookupConfig {
        LookupConfig::with_target_count(self.target_count)
    }
}

fn parse_var<T>(var: &'static str, value: Option<String>) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .map(|v| {
            v.parse().map_err(|e: T::Err| ConfigError::Invalid {
                var,
                reason: e.to_string(),
                value: v,
            })
        })
        .transpose()
}
