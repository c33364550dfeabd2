//! The five daily prayers and the set of their start times for one day.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::WaqtError;
use crate::time::TimeOfDay;

/// One of the five daily prayers.
///
/// Variant order is the canonical daily order; `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PrayerName {
    /// Dawn prayer.
    Fajr,
    /// Midday prayer.
    Dhuhr,
    /// Afternoon prayer.
    Asr,
    /// Sunset prayer.
    Maghrib,
    /// Night prayer.
    Isha,
}

impl PrayerName {
    /// All prayers in canonical order.
    pub const ALL: [PrayerName; 5] = [
        PrayerName::Fajr,
        PrayerName::Dhuhr,
        PrayerName::Asr,
        PrayerName::Maghrib,
        PrayerName::Isha,
    ];

    /// Provider spelling, e.g. `"Maghrib"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            PrayerName::Fajr => "Fajr",
            PrayerName::Dhuhr => "Dhuhr",
            PrayerName::Asr => "Asr",
            PrayerName::Maghrib => "Maghrib",
            PrayerName::Isha => "Isha",
        }
    }

    /// Position in canonical order (Fajr = 0).
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for PrayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrayerName {
    type Err = WaqtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrayerName::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| WaqtError::UnknownPrayer { name: s.to_string() })
    }
}

/// A prayer and the time it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrayerEvent {
    pub name: PrayerName,
    pub time: TimeOfDay,
}

impl PrayerEvent {
    pub fn new(name: PrayerName, time: TimeOfDay) -> Self {
        Self { name, time }
    }
}

impl fmt::Display for PrayerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.time)
    }
}

/// Start times of the five prayers for one day, in canonical order.
///
/// Names are fixed by construction. Times are expected to be non-decreasing
/// but this is not enforced; see [`PrayerSet::validate_order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrayerSet {
    events: [PrayerEvent; 5],
}

impl PrayerSet {
    /// Pairs `times` with [`PrayerName::ALL`], so `times[0]` is Fajr.
    pub fn from_times(times: [TimeOfDay; 5]) -> Self {
        let mut events = [PrayerEvent::new(PrayerName::Fajr, TimeOfDay::midnight()); 5];
        for (slot, (name, time)) in events
            .iter_mut()
            .zip(PrayerName::ALL.into_iter().zip(times))
        {
            *slot = PrayerEvent::new(name, time);
        }
        Self { events }
    }

    pub fn events(&self) -> &[PrayerEvent; 5] {
        &self.events
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PrayerEvent> {
        self.events.iter()
    }

    pub fn get(&self, name: PrayerName) -> PrayerEvent {
        self.events[name.index()]
    }

    /// Fajr, the wrap-around anchor.
    pub fn first(&self) -> PrayerEvent {
        self.events[0]
    }

    /// Isha.
    pub fn last(&self) -> PrayerEvent {
        self.events[4]
    }

    /// Checks that times never decrease in canonical order.
    ///
    /// # Errors
    /// Returns `OutOfOrder` for the first adjacent pair that decreases.
    pub fn validate_order(&self) -> Result<(), WaqtError> {
        match self.events.windows(2).find(|w| w[0].time > w[1].time) {
            Some(w) => Err(WaqtError::OutOfOrder {
                earlier: w[0],
                later: w[1],
            }),
            None => Ok(()),
        }
    }

    pub fn is_chronological(&self) -> bool {
        self.validate_order().is_ok()
    }
}

impl<'a> IntoIterator for &'a PrayerSet {
    type Item = &'a PrayerEvent;
    type IntoIter = std::slice::Iter<'a, PrayerEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
