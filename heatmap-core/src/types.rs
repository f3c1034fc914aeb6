use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Day of the week, in heatmap row order (Monday first).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Two-letter row label.
    pub fn abbrev(self) -> &'static str {
        &self.name()[..2]
    }

    /// German day name, as used by the station export files.
    fn german_name(self) -> &'static str {
        match self {
            Weekday::Monday => "Montag",
            Weekday::Tuesday => "Dienstag",
            Weekday::Wednesday => "Mittwoch",
            Weekday::Thursday => "Donnerstag",
            Weekday::Friday => "Freitag",
            Weekday::Saturday => "Samstag",
            Weekday::Sunday => "Sonntag",
        }
    }

    /// Parse a day key: "Monday", "monday", "Mo", or "Montag".
    pub fn from_key(key: &str) -> Option<Weekday> {
        let k = key.trim();
        Weekday::ALL.into_iter().find(|day| {
            k.eq_ignore_ascii_case(day.name())
                || k.eq_ignore_ascii_case(day.abbrev())
                || k.eq_ignore_ascii_case(day.german_name())
        })
    }
}

/// Identity of one constructed [`WeeklySampleSet`]. Clones share it.
pub type DatasetId = u64;

static NEXT_DATASET_ID: AtomicU64 = AtomicU64::new(1);

/// Samples per day for one week, one sequence of time-bucket counts per day.
///
/// Every day is always present; sequences may differ in length. The set is
/// immutable once built, so its [`DatasetId`] stands in for its contents.
#[derive(Clone, Debug, Default)]
pub struct WeeklySampleSet {
    id: DatasetId,
    days: [Vec<f64>; 7],
}

impl WeeklySampleSet {
    /// Build from per-day sequences in Monday..Sunday order.
    pub fn new(days: [Vec<f64>; 7]) -> Self {
        Self {
            id: NEXT_DATASET_ID.fetch_add(1, Ordering::Relaxed),
            days,
        }
    }

    pub fn id(&self) -> DatasetId {
        self.id
    }

    pub fn day(&self, day: Weekday) -> &[f64] {
        &self.days[day.index()]
    }

    /// (day, samples) pairs in Monday..Sunday order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[f64])> + '_ {
        Weekday::ALL
            .into_iter()
            .map(move |day| (day, self.days[day.index()].as_slice()))
    }

    /// All samples flattened across the week.
    pub fn samples(&self) -> impl Iterator<Item = f64> + '_ {
        self.days.iter().flat_map(|d| d.iter().copied())
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(|d| d.is_empty())
    }
}

impl PartialEq for WeeklySampleSet {
    fn eq(&self, other: &Self) -> bool {
        self.days == other.days
    }
}

impl<'de> Deserialize<'de> for WeeklySampleSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(WeekVisitor)
    }
}

struct WeekVisitor;

impl<'de> Visitor<'de> for WeekVisitor {
    type Value = WeeklySampleSet;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map from day names to sample lists")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut days: [Option<Vec<f64>>; 7] = Default::default();
        while let Some(key) = map.next_key::<String>()? {
            let day = Weekday::from_key(&key)
                .ok_or_else(|| de::Error::custom(format!("Unknown day: {key}")))?;
            let samples: Vec<f64> = map.next_value()?;
            if days[day.index()].replace(samples).is_some() {
                return Err(de::Error::custom(format!("Duplicate entry for {}", day.name())));
            }
        }

        let mut out: [Vec<f64>; 7] = Default::default();
        for day in Weekday::ALL {
            out[day.index()] = days[day.index()]
                .take()
                .ok_or_else(|| de::Error::custom(format!("Missing samples for {}", day.name())))?;
        }
        Ok(WeeklySampleSet::new(out))
    }
}
