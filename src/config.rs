//! Configuration management and validation.
//!
//! Settings for talking to the NDBC web service. Values are layered:
//! built-in defaults, then `NDBC_*` environment variables, then whatever the
//! command line overrides through the `with_*` methods.

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, default_user_agent, env_vars};
use crate::error::{NdbcError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Transport configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Provider web root; feed paths are appended to it
    pub base_url: String,

    /// Whole-request timeout in seconds
    pub timeout_secs: u64,

    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }
}

impl FetchConfig {
    /// Defaults overlaid with the process environment
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_source(|key| std::env::var(key).ok())
    }

    /// Overlay values from an environment-like lookup
    pub fn with_env_source<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(env_vars::BASE_URL) {
            debug!("{} overrides base URL", env_vars::BASE_URL);
            self.base_url = base_url;
        }

        if let Some(timeout) = lookup(env_vars::TIMEOUT_SECS) {
            self.timeout_secs = timeout.trim().parse().map_err(|_| {
                NdbcError::configuration(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    env_vars::TIMEOUT_SECS,
                    timeout
                ))
            })?;
        }

        if let Some(user_agent) = lookup(env_vars::USER_AGENT) {
            self.user_agent = user_agent;
        }

        Ok(self)
    }

    /// Set the provider web root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let base_url = self.base_url.trim();

        if base_url.is_empty() {
            return Err(NdbcError::configuration("Base URL cannot be empty"));
        }

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(NdbcError::configuration(format!(
                "Base URL must start with http:// or https://, got '{}'",
                base_url
            )));
        }

        if self.timeout_secs == 0 {
            return Err(NdbcError::configuration(
                "Timeout must be at least one second",
            ));
        }

        Ok(())
    }
}
