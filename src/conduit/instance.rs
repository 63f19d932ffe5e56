//! Instance locator deriving Conduit endpoint URLs.

use url::Url;

use super::error::ReportError;

/// A Phabricator instance addressed by its base URL.
///
/// Conduit methods live under `/api/<method>` on the instance host; this
/// wrapper owns the parsed base and derives per-method URLs so the gateway
/// never concatenates strings.
///
/// # Example
///
/// ```
/// use phab_cadence::conduit::PhabricatorInstance;
///
/// let instance = PhabricatorInstance::parse("https://phab.example.com")
///     .expect("base URL should parse");
/// let endpoint = instance
///     .method_url("user.whoami")
///     .expect("method URL should derive");
/// assert_eq!(endpoint.as_str(), "https://phab.example.com/api/user.whoami");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhabricatorInstance {
    base: Url,
}

impl PhabricatorInstance {
    /// Parses an instance base URL.
    ///
    /// Trailing slashes are tolerated; the path component is normalised so
    /// that method URLs always join cleanly.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidUrl`] when the value is not an absolute
    /// HTTP(S) URL.
    pub fn parse(value: &str) -> Result<Self, ReportError> {
        let base = Url::parse(value.trim_end_matches('/'))
            .map_err(|error| ReportError::InvalidUrl(error.to_string()))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(ReportError::InvalidUrl(format!(
                "unsupported scheme '{}'",
                base.scheme()
            )));
        }
        if base.host_str().is_none() {
            return Err(ReportError::InvalidUrl("missing host".to_owned()));
        }
        Ok(Self { base })
    }

    /// Borrow the parsed base URL.
    #[must_use]
    pub const fn base(&self) -> &Url {
        &self.base
    }

    /// Derives the URL for a Conduit method, e.g. `user.whoami`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidUrl`] when the method name does not
    /// join onto the base URL.
    pub fn method_url(&self, method: &str) -> Result<Url, ReportError> {
        let path = format!("{}/api/{method}", self.base.path().trim_end_matches('/'));
        let mut endpoint = self.base.clone();
        endpoint.set_path(&path);
        if endpoint.path().ends_with('/') || method.is_empty() {
            return Err(ReportError::InvalidUrl(format!(
                "invalid Conduit method '{method}'"
            )));
        }
        Ok(endpoint)
    }
}
