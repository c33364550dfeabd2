//! Provider configuration read from the environment.

use std::time::Duration;
use waqt_types::WaqtError;

/// Default ipgeolocation.io endpoint.
pub const DEFAULT_GEO_URL: &str = "https://api.ipgeolocation.io/ipgeo";
/// Default Aladhan API root.
pub const DEFAULT_TIMINGS_URL: &str = "http://api.aladhan.com/v1";
/// Egyptian General Authority of Survey.
pub const DEFAULT_METHOD: u8 = 5;
/// Per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Keys and endpoints for the two providers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// `IPGEO_API_KEY`, required.
    pub ipgeo_api_key: String,
    /// `X7X_API_KEY`, forwarded to Aladhan when set.
    pub x7x_api_key: Option<String>,
    pub geo_url: String,
    pub timings_url: String,
    /// Aladhan calculation method id.
    pub method: u8,
    pub timeout: Duration,
}

impl ProviderConfig {
    pub fn new(ipgeo_api_key: impl Into<String>) -> Self {
        Self {
            ipgeo_api_key: ipgeo_api_key.into(),
            x7x_api_key: None,
            geo_url: DEFAULT_GEO_URL.to_string(),
            timings_url: DEFAULT_TIMINGS_URL.to_string(),
            method: DEFAULT_METHOD,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick
    /// up a `.env` file.
    ///
    /// # Errors
    /// `InvalidConfiguration` if `IPGEO_API_KEY` is unset or empty, or
    /// `WAQT_METHOD` is not a number.
    pub fn from_env() -> Result<Self, WaqtError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but with a custom variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, WaqtError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get("IPGEO_API_KEY")
            .ok_or_else(|| WaqtError::invalid_config("IPGEO_API_KEY not set"))?;
        let mut config = Self::new(api_key);

        config.x7x_api_key = get("X7X_API_KEY");
        if let Some(url) = get("WAQT_GEO_URL") {
            config.geo_url = url;
        }
        if let Some(url) = get("WAQT_TIMINGS_URL") {
            config.timings_url = url;
        }
        if let Some(method) = get("WAQT_METHOD") {
            config.method = method.trim().parse().map_err(|_| {
                WaqtError::invalid_config(format!("WAQT_METHOD must be a number, got {:?}", method))
            })?;
        }

        Ok(config)
    }

    pub fn with_x7x_api_key(mut self, key: impl Into<String>) -> Self {
        self.x7x_api_key = Some(key.into());
        self
    }

    pub fn with_geo_url(mut self, url: impl Into<String>) -> Self {
        self.geo_url = url.into();
        self
    }

    pub fn with_timings_url(mut self, url: impl Into<String>) -> Self {
        self.timings_url = url.into();
        self
    }

    pub fn with_method(mut self, method: u8) -> Self {
        self.method = method;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ProviderConfig::from_lookup(lookup(&[("IPGEO_API_KEY", "abc")])).unwrap();
        assert_eq!(config.ipgeo_api_key, "abc");
        assert_eq!(config.x7x_api_key, None);
        assert_eq!(config.geo_url, DEFAULT_GEO_URL);
        assert_eq!(config.method, 5);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_missing_api_key() {
        let err = ProviderConfig::from_lookup(lookup(&[("X7X_API_KEY", "x")])).unwrap_err();
        assert!(matches!(err, WaqtError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_blank_api_key_is_missing() {
        assert!(ProviderConfig::from_lookup(lookup(&[("IPGEO_API_KEY", "  ")])).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = ProviderConfig::from_lookup(lookup(&[
            ("IPGEO_API_KEY", "abc"),
            ("X7X_API_KEY", "x7x"),
            ("WAQT_TIMINGS_URL", "http://localhost:9000/v1"),
            ("WAQT_METHOD", "4"),
        ]))
        .unwrap();
        assert_eq!(config.x7x_api_key.as_deref(), Some("x7x"));
        assert_eq!(config.timings_url, "http://localhost:9000/v1");
        assert_eq!(config.method, 4);
    }

    #[test]
    fn test_bad_method() {
        let result = ProviderConfig::from_lookup(lookup(&[
            ("IPGEO_API_KEY", "abc"),
            ("WAQT_METHOD", "egypt"),
        ]));
        assert!(matches!(result, Err(WaqtError::InvalidConfiguration { .. })));
    }
}
