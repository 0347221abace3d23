//! Server configuration parsed from environment variables.
//!
//! Variables (all optional):
//! - `PORT`: listen port, default 3000
//! - `MOCK_DELAY_SCALE`: multiplier on every simulated API latency, default
//!   1.0; 0 answers immediately
//! - `GOOGLE_MAPS_API_KEY`: enables the map embed links in the UI; the
//!   `.env` template value counts as unset
//! - `STRIPE_PUBLISHABLE_KEY`, `STRIPE_SECRET_KEY`: read for parity with a
//!   real deployment; payments are simulated and never call the provider

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use marina::PublicConfig;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MOCK_DELAY_SCALE: f64 = 1.0;
/// Value shipped in the `.env` template in place of a real maps key.
pub const MAPS_KEY_PLACEHOLDER: &str = "your_google_maps_api_key_here";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub mock_delay_scale: f64,
    pub maps_api_key: Option<String>,
    pub stripe_publishable_key: Option<String>,
    pub stripe_secret_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            mock_delay_scale: DEFAULT_MOCK_DELAY_SCALE,
            maps_api_key: None,
            stripe_publishable_key: None,
            stripe_secret_key: None,
        }
    }
}

impl Config {
    /// Load from the process environment. Unparsable numbers fall back to
    /// their defaults with a warning.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            port: env_parse("PORT", DEFAULT_PORT),
            mock_delay_scale: env_parse("MOCK_DELAY_SCALE", DEFAULT_MOCK_DELAY_SCALE).max(0.0),
            maps_api_key: usable_maps_key(env_nonempty("GOOGLE_MAPS_API_KEY")),
            stripe_publishable_key: env_nonempty("STRIPE_PUBLISHABLE_KEY"),
            stripe_secret_key: env_nonempty("STRIPE_SECRET_KEY"),
        }
    }

    /// Subset safe to hand to the browser. Never includes secret keys.
    #[must_use]
    pub fn public(&self) -> PublicConfig {
        PublicConfig {
            maps_api_key: self.maps_api_key.clone(),
            payments_configured: self.stripe_publishable_key.is_some() && self.stripe_secret_key.is_some(),
        }
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy + std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or_else(|_| {
            tracing::warn!(%key, value = %raw, %default, "invalid value, using default");
            default
        }),
        Err(_) => default,
    }
}

pub(crate) fn env_nonempty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

pub(crate) fn usable_maps_key(raw: Option<String>) -> Option<String> {
    raw.filter(|key| key != MAPS_KEY_PLACEHOLDER)
}
