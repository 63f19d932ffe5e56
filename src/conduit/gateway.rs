//! Gateways for querying Conduit over HTTP.
//!
//! This module provides a trait-based gateway for communicating with a
//! Phabricator instance. The trait-based design enables mocking in tests
//! while the reqwest-backed implementation handles real HTTP requests.
//!
//! Every Conduit call is an HTTP POST of a form-encoded body to
//! `{base}/api/{method}`; the `api.token` parameter authenticates against
//! Conduit itself and a bearer `Authorization` header satisfies any SSO
//! layer fronting the instance.

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

use super::credentials::{ConduitApiToken, SessionBearerToken};
use super::error::ReportError;
use super::instance::PhabricatorInstance;
use super::models::{
    ApiRevisionSearch, ApiUserSearch, ApiWhoami, ConduitEnvelope, RevisionRecord, UserProfile,
    Username,
};
use super::pagination::{Cursor, RevisionFilter, RevisionPage};

/// Gateway that can run Conduit searches.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConduitGateway: Send + Sync {
    /// Runs `user.search` with an exact-username constraint.
    async fn search_users(&self, username: &Username) -> Result<Vec<UserProfile>, ReportError>;

    /// Runs `user.whoami` with the caller's own credentials.
    async fn whoami(&self) -> Result<UserProfile, ReportError>;

    /// Runs one page of `differential.revision.search` for the given filter
    /// and cursor.
    async fn search_revisions(
        &self,
        filter: &RevisionFilter,
        cursor: &Cursor,
    ) -> Result<RevisionPage, ReportError>;
}

/// Reqwest-backed gateway.
pub struct HttpConduitGateway {
    client: reqwest::Client,
    instance: PhabricatorInstance,
    api_token: ConduitApiToken,
}

impl HttpConduitGateway {
    /// Builds a gateway for the given instance and credentials.
    ///
    /// The bearer token is installed as a default `Authorization` header so
    /// every request carries it; the API token travels in each request body
    /// as Conduit expects.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Api`] when the HTTP client cannot be
    /// constructed, for example when the bearer token contains bytes that
    /// are not valid in a header value.
    pub fn for_credentials(
        instance: PhabricatorInstance,
        api_token: ConduitApiToken,
        bearer_token: &SessionBearerToken,
    ) -> Result<Self, ReportError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let bearer = HeaderValue::from_str(&format!("Bearer {}", bearer_token.value())).map_err(
            |error| ReportError::Api {
                message: format!("build client failed: {error}"),
            },
        )?;
        headers.insert(AUTHORIZATION, bearer);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|error| ReportError::Api {
                message: format!("build client failed: {error}"),
            })?;

        Ok(Self {
            client,
            instance,
            api_token,
        })
    }

    /// Posts one Conduit call and decodes its envelope.
    async fn call<T>(&self, method: &str, params: &[(&str, &str)]) -> Result<T, ReportError>
    where
        T: DeserializeOwned,
    {
        let endpoint = self.instance.method_url(method)?;
        let mut form: Vec<(&str, &str)> = params.to_vec();
        form.push(("api.token", self.api_token.value()));

        tracing::debug!("calling Conduit {method}");
        let response = self
            .client
            .post(endpoint)
            .form(&form)
            .send()
            .await
            .map_err(|error| ReportError::Network {
                message: format!("{method}: {error}"),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|error| ReportError::Network {
            message: format!("{method}: {error}"),
        })?;

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ReportError::Authentication {
                message: format!("{method} returned {status}: {body}"),
            });
        }
        if !status.is_success() {
            return Err(ReportError::Api {
                message: format!("{method} returned {status}: {body}"),
            });
        }

        decode_envelope(method, &body)
    }
}

/// Decodes a Conduit envelope, surfacing application-level errors.
fn decode_envelope<T>(method: &str, body: &str) -> Result<T, ReportError>
where
    T: DeserializeOwned,
{
    let envelope: ConduitEnvelope<T> =
        serde_json::from_str(body).map_err(|error| ReportError::Api {
            message: format!("{method} returned an undecodable body: {error}"),
        })?;

    if let Some(code) = envelope.error_code {
        let info = envelope.error_info.unwrap_or_default();
        return Err(ReportError::Api {
            message: format!("{method} failed with {code}: {info}"),
        });
    }

    envelope.result.ok_or_else(|| ReportError::Api {
        message: format!("{method} response is missing a result"),
    })
}

#[async_trait]
impl ConduitGateway for HttpConduitGateway {
    async fn search_users(&self, username: &Username) -> Result<Vec<UserProfile>, ReportError> {
        let result: ApiUserSearch = self
            .call(
                "user.search",
                &[("constraints[usernames][0]", username.as_str())],
            )
            .await?;
        Ok(result.data.into_iter().map(UserProfile::from).collect())
    }

    async fn whoami(&self) -> Result<UserProfile, ReportError> {
        let result: ApiWhoami = self.call("user.whoami", &[]).await?;
        Ok(UserProfile::from(result))
    }

    async fn search_revisions(
        &self,
        filter: &RevisionFilter,
        cursor: &Cursor,
    ) -> Result<RevisionPage, ReportError> {
        let result: ApiRevisionSearch = self
            .call(
                "differential.revision.search",
                &[
                    (filter.constraint_key(), filter.phid().as_str()),
                    ("after", cursor.as_str()),
                ],
            )
            .await?;

        let revisions = result
            .data
            .into_iter()
            .map(RevisionRecord::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RevisionPage {
            revisions,
            next_cursor: result.cursor.after.map(Cursor::new),
        })
    }
}
