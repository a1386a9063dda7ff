// File: crates/daygraph-core/src/record.rs
// Summary: Daily activity records and the validated, date-ordered dataset.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::DatasetError;
use crate::scale::extent;

/// One day's aggregated output counts.
///
/// `total` is expected to equal `article + text + code`; that is the
/// producer's invariant and is not re-checked here.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// Calendar day, parsed from `YYYY-MM-DD`.
    pub date: NaiveDate,
    #[serde(deserialize_with = "de_count")]
    pub article: u64,
    #[serde(deserialize_with = "de_count")]
    pub text: u64,
    #[serde(deserialize_with = "de_count")]
    pub code: u64,
    #[serde(deserialize_with = "de_count")]
    pub total: u64,
    /// Present in some exports only.
    #[serde(default, deserialize_with = "de_count_opt")]
    pub todo: Option<u64>,
}

/// Non-empty run of records, strictly ascending by date.
///
/// Ordering and uniqueness are the upstream contract for the chart and the
/// summary bindings; both are checked once here so later stages can assume
/// them instead of sorting.
#[derive(Clone, Debug)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Result<Self, DatasetError> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }
        for pair in records.windows(2) {
            if pair[1].date == pair[0].date {
                return Err(DatasetError::DuplicateDate(pair[1].date));
            }
            if pair[1].date < pair[0].date {
                return Err(DatasetError::OutOfOrder { prev: pair[0].date, next: pair[1].date });
            }
        }
        Ok(Self { records })
    }

    /// Parse a JSON array of record objects and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let records: Vec<Record> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// One-shot read of a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Latest record. The constructor guarantees at least one.
    pub fn last(&self) -> &Record {
        match self.records.last() {
            Some(r) => r,
            None => unreachable!("dataset is checked non-empty at construction"),
        }
    }

    /// Extent of the record dates.
    pub fn date_domain(&self) -> (NaiveDate, NaiveDate) {
        match extent(&self.records, |r| r.date) {
            Ok(d) => d,
            Err(_) => unreachable!("dataset is checked non-empty at construction"),
        }
    }

    /// Extent of the daily totals.
    pub fn total_domain(&self) -> (u64, u64) {
        match extent(&self.records, |r| r.total) {
            Ok(d) => d,
            Err(_) => unreachable!("dataset is checked non-empty at construction"),
        }
    }
}

// ---- count coercion ---------------------------------------------------------

// The upstream exports are inconsistent about number formatting: counts show
// up both as JSON numbers and as numeric strings. Accept either.

struct CountVisitor;

impl<'de> serde::de::Visitor<'de> for CountVisitor {
    type Value = u64;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str("a non-negative count, as a number or a numeric string")
    }

    fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<u64, E> {
        Ok(v)
    }

    fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<u64, E> {
        u64::try_from(v).map_err(|_| E::custom(format!("count {v} is negative")))
    }

    fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<u64, E> {
        if v >= 0.0 && v.fract() == 0.0 {
            Ok(v as u64)
        } else {
            Err(E::custom(format!("count {v} is not a non-negative integer")))
        }
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<u64, E> {
        v.trim()
            .parse::<u64>()
            .map_err(|_| E::custom(format!("count {v:?} is not numeric")))
    }
}

fn de_count<'de, D>(de: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    de.deserialize_any(CountVisitor)
}

fn de_count_opt<'de, D>(de: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct OptVisitor;

    impl<'de> serde::de::Visitor<'de> for OptVisitor {
        type Value = Option<u64>;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("an optional non-negative count")
        }

        fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2>(self, de: D2) -> Result<Self::Value, D2::Error>
        where
            D2: serde::Deserializer<'de>,
        {
            de.deserialize_any(CountVisitor).map(Some)
        }
    }

    de.deserialize_option(OptVisitor)
}
