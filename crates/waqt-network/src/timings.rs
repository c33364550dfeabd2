//! Daily prayer timings via the Aladhan API.

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{info, warn};
use waqt_schedule::{build_prayer_set, filter_canonical};
use waqt_types::{GeoLocation, PrayerName, PrayerSet, WaqtError};

use crate::config::ProviderConfig;
use crate::http;

#[derive(Debug, Deserialize)]
struct AladhanResponse {
    code: u16,
    status: String,
    data: AladhanData,
}

/// On success `data` is an object; on failure it is a message string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AladhanData {
    Timings { timings: HashMap<String, String> },
    Message(String),
}

/// Fetches the day's timings for a city.
#[derive(Debug, Clone)]
pub struct AladhanClient {
    client: reqwest::Client,
    base_url: String,
    method: String,
    x7x_api_key: Option<String>,
}

impl AladhanClient {
    /// # Errors
    /// `NetworkError` if the HTTP client cannot be built.
    pub fn new(config: &ProviderConfig) -> Result<Self, WaqtError> {
        Ok(Self {
            client: http::client(config.timeout)?,
            base_url: config.timings_url.trim_end_matches('/').to_string(),
            method: config.method.to_string(),
            x7x_api_key: config.x7x_api_key.clone(),
        })
    }

    /// Raw `HH:MM` strings for the five canonical prayers on `date`.
    ///
    /// # Errors
    /// - `NetworkError` on transport failure, timeout or undecodable body.
    /// - `IncompleteData` if the provider reports a non-200 code.
    pub async fn timings(
        &self,
        date: NaiveDate,
        geo: &GeoLocation,
    ) -> Result<HashMap<PrayerName, String>, WaqtError> {
        let date = format!("{:02}-{:02}-{}", date.day(), date.month(), date.year());
        let url = format!("{}/timingsByCity/{}", self.base_url, date);

        info!(date = %date, city = %geo.city, country = %geo.country_code, "fetching prayer times");

        let mut params = vec![
            ("latitude", geo.latitude.as_str()),
            ("longitude", geo.longitude.as_str()),
            ("city", geo.city.as_str()),
            ("country", geo.country_code.as_str()),
            ("method", self.method.as_str()),
        ];
        if let Some(key) = &self.x7x_api_key {
            params.push(("x7xapikey", key.as_str()));
        }

        let response: AladhanResponse = http::get_json(&self.client, &url, &params).await?;

        match (response.code, response.data) {
            (200, AladhanData::Timings { timings }) => Ok(filter_canonical(&timings)),
            (code, data) => {
                if let AladhanData::Message(message) = &data {
                    warn!(code, status = %response.status, %message, "prayer times request rejected");
                }
                Err(WaqtError::provider_status(code, &response.status))
            }
        }
    }

    /// Fetches timings and builds the corrected [`PrayerSet`].
    ///
    /// # Errors
    /// Anything from [`timings`](Self::timings) or `build_prayer_set`.
    pub async fn prayer_set(&self, date: NaiveDate, geo: &GeoLocation) -> Result<PrayerSet, WaqtError> {
        let timings = self.timings(date, geo).await?;
        build_prayer_set(&timings)
    }
}
