//! Process configuration.
//!
//! Origins and client credentials come from the environment (a `.env` file
//! is honored). The configuration is an explicit value handed to
//! [`AppClient::start`](crate::client::AppClient::start) rather than
//! process-wide state, so hosts and tests can run several clients side by
//! side.

use dotenv::dotenv;
use std::env;

use crate::error::Error;

pub const ENV_API_ORIGIN: &str = "DANMAKU_API_ORIGIN";
pub const ENV_APPLICATION_ORIGIN: &str = "DANMAKU_APPLICATION_ORIGIN";
pub const ENV_TOKEN_URL: &str = "DANMAKU_TOKEN_URL";
pub const ENV_CLIENT_ID: &str = "DANMAKU_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "DANMAKU_CLIENT_SECRET";

/// Connection settings for the remote service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the comment API surface. Carried for hosts that talk to
    /// it directly; the accessors in this crate only use
    /// `application_origin`.
    pub api_origin: String,
    /// Base URL of the application service all entity paths hang off.
    pub application_origin: String,
    /// OAuth2 token endpoint for the client-credentials exchange.
    pub token_url: String,
    pub client_id: String,
    pub client_secret: String,
}

impl Config {
    /// Loads configuration from `DANMAKU_*` environment variables,
    /// reading a `.env` file first if one exists.
    ///
    /// # Errors
    /// Returns [`Error::MissingConfig`] naming the first variable that is
    /// not set.
    pub fn from_env() -> Result<Self, Error> {
        dotenv().ok();

        Ok(Self {
            api_origin: require(ENV_API_ORIGIN)?,
            application_origin: require(ENV_APPLICATION_ORIGIN)?,
            token_url: require(ENV_TOKEN_URL)?,
            client_id: require(ENV_CLIENT_ID)?,
            client_secret: require(ENV_CLIENT_SECRET)?,
        })
    }
}

fn require(name: &str) -> Result<String, Error> {
    env::var(name).map_err(|e| Error::MissingConfig(format!("{name} must be set: {e}")))
}

#[cfg(test)]
#[allow(unsafe_code)] // env::set_var is unsafe in edition 2024
mod tests {
    use super::*;

    // Environment mutation is process-global, so everything lives in one
    // test to avoid interleaving with parallel tests.
    #[test]
    fn from_env_reads_all_variables() {
        unsafe {
            env::set_var(ENV_API_ORIGIN, "https://api.example.test");
            env::set_var(ENV_APPLICATION_ORIGIN, "https://app.example.test");
            env::set_var(ENV_TOKEN_URL, "https://auth.example.test/token");
            env::set_var(ENV_CLIENT_ID, "client-id");
            env::set_var(ENV_CLIENT_SECRET, "client-secret");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.api_origin, "https://api.example.test");
        assert_eq!(config.application_origin, "https://app.example.test");
        assert_eq!(config.token_url, "https://auth.example.test/token");
        assert_eq!(config.client_id, "client-id");
        assert_eq!(config.client_secret, "client-secret");

        unsafe {
            env::remove_var(ENV_CLIENT_SECRET);
        }
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, Error::MissingConfig(msg) if msg.contains(ENV_CLIENT_SECRET)));
    }
}
