//! Cursor state and search filters for paginated revision queries.
//!
//! `differential.revision.search` pages through results with an opaque
//! `after` cursor. The first request sends the sentinel value `0`; each
//! response either carries the next cursor or `null` to signal exhaustion.

use super::models::{RevisionRecord, UserPhid};

/// Opaque pagination cursor for revision searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor(String);

impl Cursor {
    /// The sentinel cursor sent on the first request.
    #[must_use]
    pub fn initial() -> Self {
        Self("0".to_owned())
    }

    /// Wraps a cursor value returned by the server.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the cursor value as sent in the `after` parameter.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Which side of a revision the search constrains on.
///
/// The two report types share one search algorithm and differ only in the
/// populated constraint field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevisionFilter {
    /// Revisions authored by the user (`constraints[authorPHIDs][0]`).
    AuthoredBy(UserPhid),
    /// Revisions the user is assigned to review
    /// (`constraints[reviewerPHIDs][0]`).
    ReviewedBy(UserPhid),
}

impl RevisionFilter {
    /// Returns the Conduit constraint parameter name for this filter.
    #[must_use]
    pub const fn constraint_key(&self) -> &'static str {
        match self {
            Self::AuthoredBy(_) => "constraints[authorPHIDs][0]",
            Self::ReviewedBy(_) => "constraints[reviewerPHIDs][0]",
        }
    }

    /// Returns the user identifier the constraint is populated with.
    #[must_use]
    pub const fn phid(&self) -> &UserPhid {
        match self {
            Self::AuthoredBy(phid) | Self::ReviewedBy(phid) => phid,
        }
    }
}

/// One page of revision search results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionPage {
    /// Revisions in server-returned order.
    pub revisions: Vec<RevisionRecord>,
    /// Cursor for the next page, or `None` when the result set is
    /// exhausted.
    pub next_cursor: Option<Cursor>,
}
