//! Building a [`PrayerSet`] from provider timings.

use std::collections::HashMap;

use tracing::debug;
use waqt_types::{PrayerName, PrayerSet, TimeOfDay, WaqtError};

use crate::parser::parse_time;

/// Builds the day's prayer set from raw `HH:MM` strings.
///
/// Every time is parsed with the DST correction applied. Events come out in
/// canonical order whatever the map order was.
///
/// # Errors
/// - `IncompleteData` naming every canonical prayer absent from `timings`.
/// - `InvalidTime` for the first malformed string. The whole set is rejected
///   rather than letting one bad value skew the ordering.
pub fn build_prayer_set(timings: &HashMap<PrayerName, String>) -> Result<PrayerSet, WaqtError> {
    let missing: Vec<PrayerName> = PrayerName::ALL
        .into_iter()
        .filter(|name| !timings.contains_key(name))
        .collect();
    if !missing.is_empty() {
        return Err(WaqtError::missing_prayers(&missing));
    }

    let mut times = [TimeOfDay::midnight(); 5];
    for (slot, name) in times.iter_mut().zip(PrayerName::ALL) {
        let raw = &timings[&name];
        *slot = parse_time(raw, true)?;
        debug!(prayer = %name, raw = %raw, corrected = %slot, "parsed prayer time");
    }

    Ok(PrayerSet::from_times(times))
}

/// Keeps only the five canonical prayers from a provider timing map.
///
/// Providers also send entries such as `Sunrise`, `Imsak` or `Midnight`;
/// those are dropped.
pub fn filter_canonical(raw: &HashMap<String, String>) -> HashMap<PrayerName, String> {
    raw.iter()
        .filter_map(|(key, value)| {
            key.parse::<PrayerName>()
                .ok()
                .map(|name| (name, value.clone()))
        })
        .collect()
}
