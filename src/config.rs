use std::env;
use std::num::NonZeroU32;
use std::time::Duration;

use crate::region::Region;
use crate::types::ConfigError;

pub const DEFAULT_DDRAGON_VERSION: &str = "15.12.1";
pub const DEFAULT_DDRAGON_LANGUAGE: &str = "en_US";

/// How the core reacts to `429 Too Many Requests`.
///
/// The default follows the server's `Retry-After` forever. Setting
/// `max_retries` makes the policy bounded: once reached, the 429 is reported
/// as [`StatusError::RateLimitExceeded`](crate::types::StatusError).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimitPolicy {
    pub max_retries: Option<u32>,
    /// Upper bound applied to each server requested wait.
    pub max_wait: Option<Duration>,
}

impl RateLimitPolicy {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn bounded(max_retries: u32) -> Self {
        Self {
            max_retries: Some(max_retries),
            max_wait: None,
        }
    }

    pub fn with_max_wait(mut self, max_wait: Duration) -> Self {
        self.max_wait = Some(max_wait);
        self
    }

    pub(crate) fn allows_retry(&self, attempts: u32) -> bool {
        self.max_retries.is_none_or(|max| attempts < max)
    }

    pub(crate) fn clamp_wait(&self, wait: Duration) -> Duration {
        match self.max_wait {
            Some(max) if wait > max => {
                tracing::warn!(
                    "[RIOT::CLIENT] Retry-After of {:?} clamped to {:?}",
                    wait,
                    max
                );
                max
            }
            _ => wait,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub region: Region,
    pub ddragon_version: String,
    pub ddragon_language: String,
    pub rate_limit: RateLimitPolicy,
    /// Client side throttle applied before every request.
    pub requests_per_second: Option<NonZeroU32>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>, region: Region) -> Self {
        Self {
            api_key: api_key.into(),
            region,
            ddragon_version: DEFAULT_DDRAGON_VERSION.into(),
            ddragon_language: DEFAULT_DDRAGON_LANGUAGE.into(),
            rate_limit: RateLimitPolicy::default(),
            requests_per_second: None,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let api_key = env::var("RIOT_API_KEY").map_err(|_| ConfigError::Missing("RIOT_API_KEY"))?;

        let region = match env::var("RIOT_REGION") {
            Ok(value) => value.parse()?,
            Err(_) => Region::NA1,
        };

        let ddragon_version =
            env::var("DDRAGON_VERSION").unwrap_or_else(|_| DEFAULT_DDRAGON_VERSION.into());
        let ddragon_language =
            env::var("DDRAGON_LANGUAGE").unwrap_or_else(|_| DEFAULT_DDRAGON_LANGUAGE.into());

        let requests_per_second = parse_var::<u32>("RIOT_RATE_LIMIT_PER_SECOND")?
            .map(|n| {
                NonZeroU32::new(n).ok_or(ConfigError::InvalidNumber {
                    name: "RIOT_RATE_LIMIT_PER_SECOND",
                    value: n.to_string(),
                })
            })
            .transpose()?;

        let rate_limit = RateLimitPolicy {
            max_retries: parse_var("RIOT_MAX_RATE_LIMIT_RETRIES")?,
            max_wait: None,
        };

        Ok(Self {
            api_key,
            region,
            ddragon_version,
            ddragon_language,
            rate_limit,
            requests_per_second,
        })
    }

    pub fn with_ddragon_version(mut self, version: impl Into<String>) -> Self {
        self.ddragon_version = version.into();
        self
    }

    pub fn with_ddragon_language(mut self, language: impl Into<String>) -> Self {
        self.ddragon_language = language.into();
        self
    }

    pub fn with_rate_limit(mut self, policy: RateLimitPolicy) -> Self {
        self.rate_limit = policy;
        self
    }

    pub fn with_requests_per_second(mut self, rps: NonZeroU32) -> Self {
        self.requests_per_second = Some(rps);
        self
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
        Err(_) => Ok(None),
    }
}
