//! Ongoing and next prayer queries.

use serde::Serialize;
use std::fmt;
use tracing::trace;
use waqt_types::{PrayerEvent, PrayerSet, TimeOfDay};

/// Minutes a prayer stays "ongoing" after it starts, unless configured.
pub const DEFAULT_ONGOING_WINDOW_MINUTES: u32 = 60;

/// Returns the first prayer, in canonical order, whose ongoing window
/// `[start, start + window_minutes)` contains `current`.
///
/// Windows do not wrap across midnight. The end is measured in minutes since
/// midnight and `current` never passes 23:59, so a window opening at 23:30
/// effectively closes at midnight.
///
/// `None` is a normal answer: between prayers, or late at night.
///
/// # Example
/// ```rust
/// use waqt_schedule::{find_ongoing_prayer, parse_current_time};
/// use waqt_types::{PrayerName, PrayerSet, TimeOfDay};
///
/// let t = |h, m| TimeOfDay::new(h, m).unwrap();
/// let set = PrayerSet::from_times([t(5, 0), t(12, 15), t(15, 45), t(18, 20), t(19, 45)]);
///
/// let now = parse_current_time("12:20").unwrap();
/// let ongoing = find_ongoing_prayer(&set, now, 60).unwrap();
/// assert_eq!(ongoing.name, PrayerName::Dhuhr);
/// ```
pub fn find_ongoing_prayer(
    set: &PrayerSet,
    current: TimeOfDay,
    window_minutes: u32,
) -> Option<PrayerEvent> {
    let now = current.minutes_since_midnight();
    set.iter()
        .find(|event| {
            let start = event.time.minutes_since_midnight();
            let end = start.saturating_add(window_minutes);
            start <= now && now < end
        })
        .copied()
}

/// Returns the first prayer, in canonical order, starting strictly after
/// `current`.
///
/// After the last prayer of the day this wraps to the first one (Fajr), which
/// the caller should read as tomorrow's. It never fails.
pub fn find_next_prayer(set: &PrayerSet, current: TimeOfDay) -> PrayerEvent {
    match set.iter().find(|event| event.time > current) {
        Some(event) => *event,
        None => {
            trace!(current = %current, "no prayer left today, wrapping to the first");
            set.first()
        }
    }
}

/// Both answers for one moment, plus how long until the next prayer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrayerStatus {
    pub current: TimeOfDay,
    pub ongoing: Option<PrayerEvent>,
    pub next: PrayerEvent,
    /// The next query wrapped around, so `next` is tomorrow's prayer.
    pub next_is_tomorrow: bool,
    pub minutes_until_next: u32,
}

/// Runs [`find_ongoing_prayer`] and [`find_next_prayer`] for `current`.
///
/// The two answers are independent and not checked against each other.
pub fn prayer_status(set: &PrayerSet, current: TimeOfDay, window_minutes: u32) -> PrayerStatus {
    let ongoing = find_ongoing_prayer(set, current, window_minutes);
    let next = find_next_prayer(set, current);
    let next_is_tomorrow = next.time <= current;

    PrayerStatus {
        current,
        ongoing,
        next,
        next_is_tomorrow,
        minutes_until_next: current.minutes_until(next.time),
    }
}

impl fmt::Display for PrayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ongoing {
            Some(event) => write!(f, "{} ongoing since {}", event.name, event.time)?,
            None => f.write_str("No prayer ongoing")?,
        }

        let hours = self.minutes_until_next / 60;
        let minutes = self.minutes_until_next % 60;
        write!(f, "; next is {} at {}", self.next.name, self.next.time)?;
        if self.next_is_tomorrow {
            f.write_str(" tomorrow")?;
        }
        write!(f, " (in {}h {:02}m)", hours, minutes)
    }
}
