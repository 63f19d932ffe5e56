//! Paginated revision retrieval used by the report session.

use super::error::ReportError;
use super::gateway::ConduitGateway;
use super::models::{RevisionRecord, UserPhid};
use super::pagination::{Cursor, RevisionFilter};

/// Accumulates every page of a revision search through a gateway.
pub struct ActivityFeed<'client, Gateway>
where
    Gateway: ConduitGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> ActivityFeed<'client, Gateway>
where
    Gateway: ConduitGateway,
{
    /// Create a new feed using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Fetches every revision authored by the user.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the underlying gateway.
    pub async fn authored_by(&self, phid: &UserPhid) -> Result<Vec<RevisionRecord>, ReportError> {
        self.collect_all(RevisionFilter::AuthoredBy(phid.clone()))
            .await
    }

    /// Fetches every revision the user is assigned to review.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the underlying gateway.
    pub async fn reviewed_by(&self, phid: &UserPhid) -> Result<Vec<RevisionRecord>, ReportError> {
        self.collect_all(RevisionFilter::ReviewedBy(phid.clone()))
            .await
    }

    /// Walks the cursor chain for one filter, appending pages in server
    /// order until the server reports no further cursor.
    ///
    /// There is no iteration cap: the server's contract to eventually
    /// return a null cursor is trusted, and exactly one request is
    /// outstanding at a time.
    async fn collect_all(
        &self,
        filter: RevisionFilter,
    ) -> Result<Vec<RevisionRecord>, ReportError> {
        let mut revisions = Vec::new();
        let mut cursor = Cursor::initial();

        loop {
            let page = self.client.search_revisions(&filter, &cursor).await?;
            revisions.extend(page.revisions);
            match page.next_cursor {
                Some(next) => cursor = next,
                None => break,
            }
        }

        tracing::debug!(
            "collected {} revisions for {}",
            revisions.len(),
            filter.constraint_key()
        );
        Ok(revisions)
    }
}
