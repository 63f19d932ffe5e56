//! User resolution against the instance's directory.

use super::error::ReportError;
use super::gateway::ConduitGateway;
use super::models::{UserPhid, UserProfile, Username};

/// Resolves usernames to stable identifiers through a gateway.
pub struct UserDirectory<'client, Gateway>
where
    Gateway: ConduitGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> UserDirectory<'client, Gateway>
where
    Gateway: ConduitGateway,
{
    /// Create a new directory facade using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Looks up a user's stable identifier by exact username.
    ///
    /// Returns the first match's identifier, or `None` when the search
    /// produced no match; the caller decides how to report "user not
    /// found".
    ///
    /// # Errors
    ///
    /// Propagates any failure from the underlying gateway.
    pub async fn resolve_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<UserPhid>, ReportError> {
        let matches = self.client.search_users(username).await?;
        Ok(matches.into_iter().next().map(|profile| profile.phid))
    }

    /// Retrieves the identifier and display name of the authenticated
    /// caller.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the underlying gateway.
    pub async fn current_user(&self) -> Result<UserProfile, ReportError> {
        self.client.whoami().await
    }
}
