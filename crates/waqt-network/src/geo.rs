//! IP-based geolocation via ipgeolocation.io.

use serde::Deserialize;
use tracing::info;
use waqt_types::{GeoLocation, WaqtError};

use crate::config::ProviderConfig;
use crate::http;

#[derive(Debug, Deserialize)]
struct IpGeoResponse {
    latitude: String,
    longitude: String,
    country_code2: String,
    #[serde(default)]
    city: String,
}

impl From<IpGeoResponse> for GeoLocation {
    fn from(r: IpGeoResponse) -> Self {
        GeoLocation {
            latitude: r.latitude,
            longitude: r.longitude,
            country_code: r.country_code2,
            city: r.city,
        }
    }
}

/// Looks up the caller's location from its public IP.
#[derive(Debug, Clone)]
pub struct IpGeolocationClient {
    client: reqwest::Client,
    url: String,
    api_key: String,
}

impl IpGeolocationClient {
    /// # Errors
    /// `NetworkError` if the HTTP client cannot be built.
    pub fn new(config: &ProviderConfig) -> Result<Self, WaqtError> {
        Ok(Self {
            client: http::client(config.timeout)?,
            url: config.geo_url.clone(),
            api_key: config.ipgeo_api_key.clone(),
        })
    }

    /// Fetches latitude, longitude, country code and city.
    ///
    /// # Errors
    /// `NetworkError` on transport failure, timeout, or an unexpected body
    /// (ipgeolocation.io answers errors with a `message` object, which fails
    /// to decode here).
    pub async fn locate(&self) -> Result<GeoLocation, WaqtError> {
        info!(url = %self.url, "fetching geolocation");

        let response: IpGeoResponse =
            http::get_json(&self.client, &self.url, &[("apiKey", self.api_key.as_str())]).await?;
        let location = GeoLocation::from(response);

        info!(location = %location.display_name(), "geolocation resolved");
        Ok(location)
    }
}
