//! Property tests of day reduction over arbitrary time-ordered forecasts.

use chrono::{DateTime, FixedOffset, Utc};
use dayforecast::{
    reduce, ConditionReading, DayKey, ForecastEntry, MainReadings, ReduceError, WindReadings,
};
use proptest::prelude::*;
use std::collections::HashSet;

/// 2024-10-19 00:00:00 UTC
const BASE: i64 = 1729296000;

fn entry(dt: i64, temp: f64) -> ForecastEntry {
    ForecastEntry {
        dt: Some(dt),
        main: Some(MainReadings { temp: Some(temp) }),
        wind: Some(WindReadings { speed: Some(1.0) }),
        weather: vec![ConditionReading {
            main: Some("Clouds".to_string()),
            description: Some("few clouds".to_string()),
            icon: Some("02d".to_string()),
        }],
    }
}

/// Sorted forecasts of up to 60 entries spread over roughly ten days.
fn sorted_entries() -> impl Strategy<Value = Vec<ForecastEntry>> {
    prop::collection::vec(0i64..10 * 24 * 3600, 0..60).prop_map(|mut offsets| {
        offsets.sort_unstable();
        offsets
            .into_iter()
            .enumerate()
            .map(|(i, offset)| entry(BASE + offset, i as f64))
            .collect()
    })
}

fn zone() -> impl Strategy<Value = FixedOffset> {
    (-12i32..=14).prop_map(|hours| FixedOffset::east_opt(hours * 3600).unwrap())
}

fn key_of(entry: &ForecastEntry, tz: &FixedOffset) -> DayKey {
    let ts = DateTime::<Utc>::from_timestamp(entry.dt.unwrap(), 0).unwrap();
    DayKey::new(&ts, tz)
}

/// Distinct day keys in order of first appearance, with the index of that appearance.
fn first_appearances(entries: &[ForecastEntry], tz: &FixedOffset) -> Vec<(DayKey, usize)> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .enumerate()
        .filter_map(|(i, e)| {
            let key = key_of(e, tz);
            seen.insert(key).then_some((key, i))
        })
        .collect()
}

proptest! {
    #[test]
    fn output_is_bounded_by_limit_and_distinct_days(
        entries in sorted_entries(),
        limit in 1usize..8,
        tz in zone(),
    ) {
        let days = reduce(&entries, limit, &tz).unwrap();
        let distinct = first_appearances(&entries, &tz).len();

        prop_assert_eq!(days.len(), distinct.min(limit));
    }

    #[test]
    fn output_has_no_duplicate_days(entries in sorted_entries(), tz in zone()) {
        let days = reduce(&entries, 10, &tz).unwrap();
        let keys: HashSet<DayKey> = days.iter().map(|d| d.day).collect();

        prop_assert_eq!(keys.len(), days.len());
    }

    #[test]
    fn output_follows_first_appearance_and_keeps_first_sample(
        entries in sorted_entries(),
        limit in 1usize..8,
        tz in zone(),
    ) {
        let days = reduce(&entries, limit, &tz).unwrap();
        let expected: Vec<(DayKey, usize)> =
            first_appearances(&entries, &tz).into_iter().take(limit).collect();

        prop_assert_eq!(days.len(), expected.len());
        for (day, (key, index)) in days.iter().zip(expected) {
            prop_assert_eq!(day.day, key);
            // Temperatures were set to the entry index.
            prop_assert_eq!(day.sample.temperature, index as f64);
        }
    }

    #[test]
    fn reducing_twice_changes_nothing(
        entries in sorted_entries(),
        limit in 1usize..8,
        tz in zone(),
    ) {
        let once = reduce(&entries, limit, &tz).unwrap();
        let again: Vec<ForecastEntry> = once.iter().map(|d| ForecastEntry::from(&d.sample)).collect();
        let twice = reduce(&again, limit, &tz).unwrap();

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn zero_limit_is_always_rejected(entries in sorted_entries(), tz in zone()) {
        prop_assert!(matches!(
            reduce(&entries, 0, &tz),
            Err(ReduceError::InvalidArgument(_))
        ));
    }
}
