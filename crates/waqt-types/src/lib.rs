//! Core types for waqt.
//!
//! Everything here is plain data: a time of day without a date, the five
//! canonical prayers, and the error type shared by the other crates.

pub mod error;
pub mod geo;
pub mod prayer;
pub mod time;

pub use error::WaqtError;
pub use geo::GeoLocation;
pub use prayer::{PrayerEvent, PrayerName, PrayerSet};
pub use time::TimeOfDay;
