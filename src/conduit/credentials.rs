//! Credential wrappers for Conduit authentication.
//!
//! Every Conduit call carries two secrets: the `api.token` form parameter
//! and a bearer token for the SSO layer fronting the instance. Both are
//! wrapped in newtypes that enforce a non-blank, trimmed value at
//! construction so the gateway never has to re-validate them.

use super::error::ReportError;

/// Conduit API token wrapper enforcing presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConduitApiToken(String);

impl ConduitApiToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::MissingApiToken`] when the supplied string is
    /// blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, ReportError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ReportError::MissingApiToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for ConduitApiToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

/// SSO bearer token wrapper enforcing presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionBearerToken(String);

impl SessionBearerToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::MissingBearerToken`] when the supplied string
    /// is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, ReportError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ReportError::MissingBearerToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for SessionBearerToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::super::error::ReportError;
    use super::{ConduitApiToken, SessionBearerToken};

    #[rstest]
    #[case::plain("cli-abc123", "cli-abc123")]
    #[case::surrounding_whitespace("  cli-abc123\n", "cli-abc123")]
    fn api_token_trims_and_keeps_value(#[case] input: &str, #[case] expected: &str) {
        let token = ConduitApiToken::new(input).expect("token should be accepted");
        assert_eq!(token.value(), expected, "token value mismatch");
    }

    #[rstest]
    #[case::empty("")]
    #[case::only_whitespace("   \t")]
    fn api_token_rejects_blank_input(#[case] input: &str) {
        let result = ConduitApiToken::new(input);
        assert_eq!(
            result,
            Err(ReportError::MissingApiToken),
            "blank API token should be rejected"
        );
    }

    #[rstest]
    fn bearer_token_rejects_blank_input() {
        let result = SessionBearerToken::new(" ");
        assert_eq!(
            result,
            Err(ReportError::MissingBearerToken),
            "blank bearer token should be rejected"
        );
    }

    #[rstest]
    fn bearer_token_exposes_value_via_as_ref() {
        let token = SessionBearerToken::new("usso-session").expect("token should be accepted");
        assert_eq!(token.as_ref(), "usso-session", "AsRef value mismatch");
    }
}
