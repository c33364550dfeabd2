//! Location as reported by the geolocation provider.

use serde::{Deserialize, Serialize};

/// Coordinates, country and city, all kept as text the way the provider
/// sends them. They are only ever forwarded to the timing provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: String,
    pub longitude: String,
    /// ISO 3166-1 alpha-2 code, e.g. "EG".
    pub country_code: String,
    pub city: String,
}

impl GeoLocation {
    /// Returns "City, CC", falling back to the coordinates when the
    /// provider gave no place name.
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.city.as_str(), self.country_code.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();

        if parts.is_empty() {
            format!("{}, {}", self.latitude, self.longitude)
        } else {
            parts.join(", ")
        }
    }
}
