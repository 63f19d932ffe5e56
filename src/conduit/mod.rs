//! Conduit API client layer.
//!
//! This module wraps reqwest to call a Phabricator instance's Conduit API:
//! exact-username lookup, whoami, and cursor-paginated revision searches.
//! Errors are mapped into user-facing variants so callers can surface
//! precise failures without exposing transport internals.

pub mod activity;
pub mod credentials;
pub mod directory;
pub mod error;
pub mod gateway;
pub mod instance;
pub mod models;
pub mod pagination;

pub use activity::ActivityFeed;
pub use credentials::{ConduitApiToken, SessionBearerToken};
pub use directory::UserDirectory;
pub use error::ReportError;
pub use gateway::{ConduitGateway, HttpConduitGateway};
pub use instance::PhabricatorInstance;
pub use models::{RevisionRecord, UserPhid, UserProfile, Username};
pub use pagination::{Cursor, RevisionFilter, RevisionPage};

#[cfg(test)]
pub use gateway::MockConduitGateway;

#[cfg(test)]
mod tests;
