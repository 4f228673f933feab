use crate::api::region::Region;
use crate::error::AppError;
use std::env;
use std::num::NonZeroU32;
use std::time::Duration;

const DEFAULT_REGION: &str = "na";
const DEFAULT_REQUESTS_PER_SECOND: u32 = 20;
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub region: Region,
    pub requests_per_second: NonZeroU32,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("RIOT_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AppError::ConfigError("RIOT_API_KEY not found in environment or .env file".to_string())
            })?;

        let region = lookup("RIOT_REGION")
            .unwrap_or_else(|| DEFAULT_REGION.to_string())
            .parse::<Region>()?;

        let requests_per_second = match lookup("RIOT_REQUESTS_PER_SECOND") {
            Some(raw) => raw.trim().parse::<NonZeroU32>().map_err(|_| {
                AppError::ConfigError(format!(
                    "RIOT_REQUESTS_PER_SECOND must be a positive integer, got '{}'",
                    raw
                ))
            })?,
            None => NonZeroU32::new(DEFAULT_REQUESTS_PER_SECOND)
                .ok_or_else(|| AppError::ConfigError("invalid default quota".to_string()))?,
        };

        let timeout_secs = match lookup("RIOT_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                AppError::ConfigError(format!("RIOT_TIMEOUT_SECS must be an integer, got '{}'", raw))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Config {
            api_key,
            region,
            requests_per_second,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
