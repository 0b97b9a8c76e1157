//! Runtime configuration.
//!
//! Defaults suit the public mail.tm service with an `emails.txt` next to the
//! working directory; each setting can be overridden from the environment.

use std::path::PathBuf;
use std::time::Duration;

use chrono_tz::Tz;

use crate::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::time::DEFAULT_DISPLAY_TZ;
use crate::{ClientBuilder, CredentialStore, Error, Result};

/// Store file location.
pub const ENV_EMAIL_FILE: &str = "MAILTM_EMAIL_FILE";
/// API base URL.
pub const ENV_BASE_URL: &str = "MAILTM_BASE_URL";
/// Request timeout in whole seconds.
pub const ENV_TIMEOUT_SECS: &str = "MAILTM_TIMEOUT_SECS";
/// Proxy URL for all requests.
pub const ENV_PROXY: &str = "MAILTM_PROXY";
/// IANA zone name used to display timestamps.
pub const ENV_DISPLAY_TZ: &str = "MAILTM_DISPLAY_TZ";

const DEFAULT_EMAIL_FILE: &str = "emails.txt";

/// Settings for one run of the tool.
#[derive(Debug, Clone)]
pub struct Config {
    /// Credentials file.
    pub store_path: PathBuf,
    /// mail.tm API base URL.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Optional proxy URL.
    pub proxy: Option<String>,
    /// Zone account timestamps are displayed in.
    pub display_tz: Tz,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_EMAIL_FILE),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            proxy: None,
            display_tz: DEFAULT_DISPLAY_TZ,
        }
    }
}

impl Config {
    /// Defaults overridden by the `MAILTM_*` environment variables.
    ///
    /// # Errors
    /// Returns [`Error::Config`] for a timeout that is not a positive integer
    /// or a zone name `chrono-tz` does not know.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Config::from_env`] but reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(path) = get(ENV_EMAIL_FILE) {
            config.store_path = PathBuf::from(path);
        }
        if let Some(url) = get(ENV_BASE_URL) {
            config.base_url = url.trim().to_string();
        }
        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| Error::Config {
                    msg: format!("{ENV_TIMEOUT_SECS} must be a positive integer, got `{raw}`"),
                })?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(proxy) = get(ENV_PROXY) {
            config.proxy = Some(proxy.trim().to_string());
        }
        if let Some(name) = get(ENV_DISPLAY_TZ) {
            config.display_tz = name.trim().parse::<Tz>().map_err(|_| Error::Config {
                msg: format!("{ENV_DISPLAY_TZ}: unknown time zone `{name}`"),
            })?;
        }

        Ok(config)
    }

    /// Client builder carrying the base URL, timeout and proxy.
    pub fn client_builder(&self) -> ClientBuilder {
        let builder = ClientBuilder::new()
            .base_url(self.base_url.clone())
            .timeout(self.timeout);
        match &self.proxy {
            Some(proxy) => builder.proxy(proxy.clone()),
            None => builder,
        }
    }

    /// Store handle for the configured file.
    pub fn store(&self) -> CredentialStore {
        CredentialStore::new(self.store_path.clone())
    }
}
