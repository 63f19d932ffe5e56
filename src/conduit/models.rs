//! Wire and domain models for Conduit search results.
//!
//! Wire types mirror the JSON Conduit returns and stay private to the
//! client layer; domain types carry only what the report needs. The
//! wire-to-domain conversion is the ingestion boundary: it validates the
//! creation timestamp so downstream aggregation never sees a malformed one.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::error::ReportError;

/// Stable user identifier (`PHID-USER-...`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserPhid(String);

impl UserPhid {
    /// Wraps a raw PHID value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the PHID value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for UserPhid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Username wrapper rejecting blank input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Validates that the username is non-empty and trims whitespace.
    ///
    /// Returns `None` for blank input, which callers treat as "use the
    /// current user" rather than as an error.
    #[must_use]
    pub fn new(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_owned()))
    }

    /// Borrow the username value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved user: stable identifier plus display username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    /// Stable identifier used in search constraints.
    pub phid: UserPhid,
    /// Display username.
    pub username: String,
}

/// A single revision entry (an authored diff or a review assignment).
///
/// Only the creation instant participates in aggregation; the identifiers
/// are kept for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionRecord {
    /// Numeric revision identifier (the `D123` number).
    pub id: u64,
    /// Stable revision identifier.
    pub phid: String,
    /// UTC creation instant.
    pub created_at: DateTime<Utc>,
}

// --- Wire types ---

/// Conduit response envelope: a `result` payload or an error pair.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ConduitEnvelope<T> {
    pub(super) result: Option<T>,
    pub(super) error_code: Option<String>,
    pub(super) error_info: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiRevisionSearch {
    pub(super) data: Vec<ApiRevision>,
    pub(super) cursor: ApiCursor,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiRevision {
    pub(super) id: u64,
    pub(super) phid: String,
    pub(super) fields: ApiRevisionFields,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiRevisionFields {
    #[serde(rename = "dateCreated")]
    pub(super) date_created: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiCursor {
    pub(super) after: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiUserSearch {
    pub(super) data: Vec<ApiUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiUser {
    pub(super) phid: String,
    pub(super) fields: ApiUserFields,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiUserFields {
    pub(super) username: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiWhoami {
    pub(super) phid: String,
    #[serde(rename = "userName")]
    pub(super) user_name: String,
}

impl TryFrom<ApiRevision> for RevisionRecord {
    type Error = ReportError;

    fn try_from(value: ApiRevision) -> Result<Self, Self::Error> {
        let created_at = DateTime::from_timestamp(value.fields.date_created, 0).ok_or_else(|| {
            ReportError::Api {
                message: format!(
                    "revision {} has out-of-range dateCreated {}",
                    value.phid, value.fields.date_created
                ),
            }
        })?;
        Ok(Self {
            id: value.id,
            phid: value.phid,
            created_at,
        })
    }
}

impl From<ApiUser> for UserProfile {
    fn from(value: ApiUser) -> Self {
        Self {
            phid: UserPhid::new(value.phid),
            username: value.fields.username,
        }
    }
}

impl From<ApiWhoami> for UserProfile {
    fn from(value: ApiWhoami) -> Self {
        Self {
            phid: UserPhid::new(value.phid),
            username: value.user_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    use super::super::error::ReportError;
    use super::{ApiRevision, ApiWhoami, RevisionRecord, UserProfile, Username};

    #[rstest]
    fn revision_wire_format_maps_to_record() {
        let api: ApiRevision = serde_json::from_value(serde_json::json!({
            "id": 4021,
            "phid": "PHID-DREV-abc",
            "fields": { "dateCreated": 1_709_251_200 }
        }))
        .expect("revision JSON should deserialise");

        let record = RevisionRecord::try_from(api).expect("timestamp should be in range");
        assert_eq!(record.id, 4021, "id mismatch");
        assert_eq!(record.phid, "PHID-DREV-abc", "phid mismatch");
        assert_eq!(
            record.created_at,
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
            "creation instant mismatch"
        );
    }

    #[rstest]
    fn out_of_range_timestamp_is_an_api_error() {
        let api: ApiRevision = serde_json::from_value(serde_json::json!({
            "id": 1,
            "phid": "PHID-DREV-bad",
            "fields": { "dateCreated": i64::MAX }
        }))
        .expect("revision JSON should deserialise");

        let result = RevisionRecord::try_from(api);
        assert!(
            matches!(result, Err(ReportError::Api { .. })),
            "expected Api error, got {result:?}"
        );
    }

    #[rstest]
    fn whoami_wire_format_maps_to_profile() {
        let api: ApiWhoami = serde_json::from_value(serde_json::json!({
            "phid": "PHID-USER-self",
            "userName": "alice"
        }))
        .expect("whoami JSON should deserialise");

        let profile = UserProfile::from(api);
        assert_eq!(profile.phid.as_str(), "PHID-USER-self", "phid mismatch");
        assert_eq!(profile.username, "alice", "username mismatch");
    }

    #[rstest]
    #[case::plain("alice", Some("alice"))]
    #[case::padded("  alice ", Some("alice"))]
    #[case::blank("   ", None)]
    #[case::empty("", None)]
    fn username_trims_and_rejects_blank(#[case] input: &str, #[case] expected: Option<&str>) {
        let username = Username::new(input);
        assert_eq!(
            username.as_ref().map(Username::as_str),
            expected,
            "username normalisation mismatch"
        );
    }
}
