use crate::prayer::{PrayerEvent, PrayerName};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from waqt operations.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaqtError {
    /// Text is not a zero-padded 24-hour `HH:MM` value.
    #[error("Invalid time {input:?}: {reason}")]
    InvalidTime { input: String, reason: String },

    /// Provider data is missing canonical prayers or reported failure.
    #[error("Incomplete prayer data: {reason}")]
    IncompleteData { reason: String },

    /// A prayer starts before the one preceding it in canonical order.
    #[error("Prayer times out of order: {earlier} comes after {later}")]
    OutOfOrder { earlier: PrayerEvent, later: PrayerEvent },

    /// Name does not match any of the five canonical prayers.
    #[error("Unknown prayer name {name:?}")]
    UnknownPrayer { name: String },

    /// Invalid configuration.
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// Transport or decoding failure while talking to a provider.
    #[error("Network error: {0}")]
    NetworkError(String),
}

impl WaqtError {
    /// Creates an `InvalidTime` error.
    pub fn invalid_time(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTime {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Creates an `IncompleteData` error listing the missing prayers.
    pub fn missing_prayers(missing: &[PrayerName]) -> Self {
        let names: Vec<&str> = missing.iter().map(|p| p.as_str()).collect();
        Self::IncompleteData {
            reason: format!("missing {}", names.join(", ")),
        }
    }

    /// Creates an `IncompleteData` error for a non-success provider status.
    pub fn provider_status(code: u16, status: impl AsRef<str>) -> Self {
        Self::IncompleteData {
            reason: format!("provider returned {} ({})", code, status.as_ref()),
        }
    }

    /// Creates an `InvalidConfiguration` error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration { reason: reason.into() }
    }
}
