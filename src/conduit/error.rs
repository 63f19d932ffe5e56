//! Error types exposed by the Conduit client layer.

use thiserror::Error;

/// Errors surfaced while resolving configuration, talking to Conduit, or
/// running the interactive report session.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReportError {
    /// No Conduit API token was supplied through any configuration layer.
    #[error(
        "Conduit API token is required: create one under Settings -> Conduit API Tokens on your \
         Phabricator instance and export it as PHAB_CADENCE_API_TOKEN (or legacy API_TOKEN)"
    )]
    MissingApiToken,

    /// No SSO bearer token was supplied through any configuration layer.
    #[error(
        "bearer token is required: obtain a session token from your SSO helper and export it as \
         PHAB_CADENCE_BEARER_TOKEN (or legacy BEARER_TOKEN)"
    )]
    MissingBearerToken,

    /// The instance base URL could not be parsed.
    #[error("instance URL is invalid: {0}")]
    InvalidUrl(String),

    /// The instance or its SSO layer rejected the supplied credentials.
    #[error("Phabricator rejected the credentials: {message}")]
    Authentication {
        /// Detail from the 401/403 response.
        message: String,
    },

    /// Conduit reported an application-level error or returned an
    /// undecodable body.
    #[error("Conduit API error: {message}")]
    Api {
        /// Conduit `error_info` text or a description of the malformed body.
        message: String,
    },

    /// Networking failed while calling the instance.
    #[error("network error talking to Phabricator: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// A username lookup produced no match.
    #[error("User not found. Try using a different username.")]
    UserNotFound {
        /// The username that failed to resolve.
        username: String,
    },

    /// The report-type menu received something other than `1` or `2`.
    #[error("Invalid choice. Try again.")]
    InvalidChoice {
        /// The rejected menu input.
        choice: String,
    },
}
