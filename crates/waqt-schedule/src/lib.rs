//! Prayer scheduling for waqt.
//!
//! Turns provider `HH:MM` strings into a [`PrayerSet`] and answers two
//! questions about it: which prayer is ongoing right now, and which one is
//! next. All functions here are pure.

pub mod builder;
pub mod parser;
pub mod scheduler;

pub use builder::{build_prayer_set, filter_canonical};
pub use parser::{parse_current_time, parse_time, DST_CORRECTION_MINUTES};
pub use scheduler::{
    find_next_prayer, find_ongoing_prayer, prayer_status, PrayerStatus,
    DEFAULT_ONGOING_WINDOW_MINUTES,
};

pub use waqt_types::{PrayerEvent, PrayerName, PrayerSet, TimeOfDay, WaqtError};
