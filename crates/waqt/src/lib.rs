//! # Waqt
//!
//! Tells which of the five daily prayers is ongoing and which comes next.
//!
//! This crate is a facade over the `waqt` crates.
//!
//! ## Modules
//!
//! - `types`: `TimeOfDay`, `PrayerName`, `PrayerSet`, `WaqtError`
//! - `schedule`: parsing, set construction, ongoing/next queries
//! - `network`: geolocation and timing providers (`async` feature)
//! - `cli`: command line options for the `waqt` binary
//!
//! ## Usage
//!
//! ```rust
//! use std::collections::HashMap;
//! use waqt::prelude::*;
//!
//! let timings: HashMap<PrayerName, String> = [
//!     (PrayerName::Fajr, "04:00"),
//!     (PrayerName::Dhuhr, "11:15"),
//!     (PrayerName::Asr, "14:45"),
//!     (PrayerName::Maghrib, "17:20"),
//!     (PrayerName::Isha, "18:45"),
//! ]
//! .into_iter()
//! .map(|(name, time)| (name, time.to_string()))
//! .collect();
//!
//! let set = build_prayer_set(&timings)?;
//! let status = prayer_status(&set, parse_current_time("12:20")?, DEFAULT_ONGOING_WINDOW_MINUTES);
//! assert_eq!(status.ongoing.map(|e| e.name), Some(PrayerName::Dhuhr));
//! assert_eq!(status.next.name, PrayerName::Asr);
//! # Ok::<(), WaqtError>(())
//! ```

pub mod cli;

pub use waqt_schedule as schedule;
pub use waqt_types as types;

#[cfg(feature = "async")]
pub use waqt_network as network;

pub use waqt_schedule::{
    build_prayer_set, filter_canonical, find_next_prayer, find_ongoing_prayer,
    parse_current_time, parse_time, prayer_status, PrayerStatus, DEFAULT_ONGOING_WINDOW_MINUTES,
    DST_CORRECTION_MINUTES,
};
pub use waqt_types::{GeoLocation, PrayerEvent, PrayerName, PrayerSet, TimeOfDay, WaqtError};

pub mod prelude {
    pub use crate::types::*;
    pub use crate::{
        build_prayer_set, find_next_prayer, find_ongoing_prayer, parse_current_time,
        parse_time, prayer_status, PrayerStatus, DEFAULT_ONGOING_WINDOW_MINUTES,
    };
}
