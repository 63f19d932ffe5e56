//! Month bucketing and trailing-window averages.
//!
//! Every record contributes to exactly one bucket, determined by truncating
//! its creation instant to year and month in UTC. Averages always divide by
//! the number of *active* (non-empty) months, never by the window length,
//! so sparse histories are not diluted by silent months and empty windows
//! yield zero instead of a division error.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Utc};

use crate::conduit::RevisionRecord;

/// A UTC calendar month.
///
/// Stored as a count of months on a continuous axis so that ordering
/// matches chronology and window arithmetic is a plain subtraction with
/// year borrow handled implicitly.
///
/// # Example
///
/// ```
/// use phab_cadence::report::MonthKey;
///
/// let key = MonthKey::from_parts(2024, 1);
/// assert_eq!(key.months_back(1).to_string(), "2023-12");
/// assert!(key.months_back(1) < key);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    /// Months since the epoch of year 0, January.
    months: i32,
}

impl MonthKey {
    /// Builds a key from a calendar year and 1-based month.
    ///
    /// Months outside `1..=12` are clamped into range.
    #[must_use]
    pub fn from_parts(year: i32, month: u32) -> Self {
        let month0 = i32::try_from(month.clamp(1, 12)).unwrap_or(1) - 1;
        Self {
            months: year * 12 + month0,
        }
    }

    /// Truncates a UTC instant to its calendar month.
    #[must_use]
    pub fn from_datetime(instant: DateTime<Utc>) -> Self {
        let month0 = i32::try_from(instant.month0()).unwrap_or(0);
        Self {
            months: instant.year() * 12 + month0,
        }
    }

    /// Shifts the key backwards by a whole number of months.
    #[must_use]
    pub const fn months_back(self, months: i32) -> Self {
        Self {
            months: self.months - months,
        }
    }

    /// The calendar year.
    #[must_use]
    pub const fn year(self) -> i32 {
        self.months.div_euclid(12)
    }

    /// The 1-based calendar month.
    #[must_use]
    pub const fn month(self) -> i32 {
        self.months.rem_euclid(12) + 1
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

/// Averages over the trailing 1/3/6/12-month windows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentedAverages {
    /// Average over the past month window.
    pub past_month: f64,
    /// Average over the past three months window.
    pub past_three_months: f64,
    /// Average over the past six months window.
    pub past_six_months: f64,
    /// Average over the past year window.
    pub past_year: f64,
}

/// The five numbers a report prints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyAverages {
    /// All-time average per active month.
    pub overall: f64,
    /// Trailing-window averages.
    pub segmented: SegmentedAverages,
}

/// Buckets records by UTC calendar month.
///
/// Months with no contributing records are absent, not zero.
#[must_use]
pub fn bucket_by_month(records: &[RevisionRecord]) -> BTreeMap<MonthKey, u32> {
    let mut buckets = BTreeMap::new();
    for record in records {
        *buckets
            .entry(MonthKey::from_datetime(record.created_at))
            .or_insert(0_u32) += 1;
    }
    buckets
}

/// All-time average record count per active month.
///
/// Returns `0.0` for empty input.
#[must_use]
pub fn total_monthly_average(records: &[RevisionRecord]) -> f64 {
    let buckets = bucket_by_month(records);
    average(
        buckets.values().copied().sum(),
        u32::try_from(buckets.len()).unwrap_or(u32::MAX),
    )
}

/// Trailing-window averages relative to a single `now` reference.
///
/// `now` is captured once by the caller so the four windows are mutually
/// consistent. Each window of N months includes every bucket from N months
/// before `now`'s month through the current partial month, inclusive at
/// both ends.
#[must_use]
pub fn segmented_monthly_averages(
    records: &[RevisionRecord],
    now: DateTime<Utc>,
) -> SegmentedAverages {
    let buckets = bucket_by_month(records);
    let current = MonthKey::from_datetime(now);
    SegmentedAverages {
        past_month: average_since(&buckets, current.months_back(1)),
        past_three_months: average_since(&buckets, current.months_back(3)),
        past_six_months: average_since(&buckets, current.months_back(6)),
        past_year: average_since(&buckets, current.months_back(12)),
    }
}

/// Computes the full five-number payload with one `now` capture.
#[must_use]
pub fn monthly_averages(records: &[RevisionRecord], now: DateTime<Utc>) -> MonthlyAverages {
    MonthlyAverages {
        overall: total_monthly_average(records),
        segmented: segmented_monthly_averages(records, now),
    }
}

/// Average over the buckets at or after the threshold month.
fn average_since(buckets: &BTreeMap<MonthKey, u32>, threshold: MonthKey) -> f64 {
    let included = buckets.range(threshold..);
    let mut total = 0_u32;
    let mut months = 0_u32;
    for (_, count) in included {
        total += count;
        months += 1;
    }
    average(total, months)
}

#[expect(
    clippy::float_arithmetic,
    reason = "monthly averages are fractional by definition"
)]
fn average(total: u32, months: u32) -> f64 {
    if months == 0 {
        return 0.0;
    }
    f64::from(total) / f64::from(months)
}
