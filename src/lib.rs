//! Phab-cadence library crate providing monthly activity reporting.
//!
//! The library wraps a Phabricator instance's Conduit API to resolve users,
//! page through their authored revisions and review assignments, and
//! compute monthly activity averages that the CLI renders as a report.

pub mod conduit;
pub mod config;
pub mod report;

pub use conduit::{
    ActivityFeed, ConduitApiToken, ConduitGateway, Cursor, HttpConduitGateway,
    PhabricatorInstance, ReportError, RevisionFilter, RevisionPage, RevisionRecord,
    SessionBearerToken, UserDirectory, UserPhid, UserProfile, Username,
};
pub use config::CadenceConfig;
pub use report::{MonthlyAverages, SegmentedAverages, monthly_averages};
