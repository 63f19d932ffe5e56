//! Monthly activity aggregation.
//!
//! Buckets revision records by UTC calendar month and computes the all-time
//! and trailing-window monthly averages that make up a report.

pub mod monthly;

pub use monthly::{
    MonthKey, MonthlyAverages, SegmentedAverages, bucket_by_month, monthly_averages,
    segmented_monthly_averages, total_monthly_average,
};
