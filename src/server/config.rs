use std::{fmt::Display, net::SocketAddr, str::FromStr, time::Duration};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: ([u8; 4], u16) = ([0, 0, 0, 0], 8080);
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_RATE_LIMIT_PER_SECOND: u64 = 2;
const DEFAULT_RATE_LIMIT_BURST: u32 = 40;

/// Application configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,

    /// Deadline for a single request; in-flight work is dropped once it elapses.
    pub request_timeout: Duration,

    /// Seconds between replenished rate limit tokens, per client IP.
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,

    /// Registered user promoted to Administrator at startup when no admin exists.
    pub admin_email: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        Ok(Self {
            database_url,
            bind_address: parse_var(
                "BIND_ADDRESS",
                std::env::var("BIND_ADDRESS").ok(),
                SocketAddr::from(DEFAULT_BIND_ADDRESS),
            )?,
            request_timeout: Duration::from_secs(parse_var(
                "REQUEST_TIMEOUT_SECS",
                std::env::var("REQUEST_TIMEOUT_SECS").ok(),
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?),
            rate_limit_per_second: parse_var(
                "RATE_LIMIT_PER_SECOND",
                std::env::var("RATE_LIMIT_PER_SECOND").ok(),
                DEFAULT_RATE_LIMIT_PER_SECOND,
            )?,
            rate_limit_burst: parse_var(
                "RATE_LIMIT_BURST",
                std::env::var("RATE_LIMIT_BURST").ok(),
                DEFAULT_RATE_LIMIT_BURST,
            )?,
            admin_email: std::env::var("ADMIN_EMAIL")
                .ok()
                .map(|email| email.trim().to_string())
                .filter(|email| !email.is_empty()),
        })
    }
}

/// Parses an optional raw environment value, falling back to `default` when unset.
fn parse_var<T>(name: &str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value: value.clone(),
                reason: e.to_string(),
            }),
    }
}
