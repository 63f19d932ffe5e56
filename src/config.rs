//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.phab-cadence.toml` in current directory,
//!    home directory, or XDG config directory
//! 3. **Environment variables** – `PHAB_CADENCE_API_TOKEN`,
//!    `PHAB_CADENCE_BEARER_TOKEN`, `PHAB_CADENCE_INSTANCE_URL`, or the
//!    legacy bare `API_TOKEN` / `BEARER_TOKEN`
//! 4. **Command-line arguments** – `--api-token`, `--bearer-token`,
//!    `--instance-url`
//!
//! Both credentials are resolved before any prompt is shown; a missing one
//! aborts the run with its own remediation message.

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::conduit::error::ReportError;
use crate::conduit::{ConduitApiToken, SessionBearerToken};

/// Instance used when no `instance_url` is configured.
pub const DEFAULT_INSTANCE_URL: &str = "https://secure.phabricator.com";

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `PHAB_CADENCE_API_TOKEN`, `API_TOKEN` (legacy), or `--api-token`:
///   Conduit API token
/// - `PHAB_CADENCE_BEARER_TOKEN`, `BEARER_TOKEN` (legacy), or
///   `--bearer-token`: SSO bearer token
/// - `PHAB_CADENCE_INSTANCE_URL` or `--instance-url`: Phabricator base URL
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use phab_cadence::CadenceConfig;
///
/// let config = CadenceConfig::load().expect("failed to load configuration");
/// let api_token = config.resolve_api_token().expect("API token required");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "PHAB_CADENCE",
    discovery(
        dotfile_name = ".phab-cadence.toml",
        config_file_name = "phab-cadence.toml",
        app_name = "phab-cadence"
    )
)]
pub struct CadenceConfig {
    /// Conduit API token used to authenticate every API call.
    ///
    /// Can be provided via:
    /// - CLI: `--api-token <TOKEN>`
    /// - Environment: `PHAB_CADENCE_API_TOKEN` or `API_TOKEN` (legacy)
    /// - Config file: `api_token = "..."`
    pub api_token: Option<String>,

    /// Bearer token presented to the SSO layer fronting the instance.
    ///
    /// Can be provided via:
    /// - CLI: `--bearer-token <TOKEN>`
    /// - Environment: `PHAB_CADENCE_BEARER_TOKEN` or `BEARER_TOKEN` (legacy)
    /// - Config file: `bearer_token = "..."`
    pub bearer_token: Option<String>,

    /// Phabricator instance base URL.
    ///
    /// Can be provided via:
    /// - CLI: `--instance-url <URL>`
    /// - Environment: `PHAB_CADENCE_INSTANCE_URL`
    /// - Config file: `instance_url = "..."`
    ///
    /// Defaults to [`DEFAULT_INSTANCE_URL`] when unset.
    pub instance_url: Option<String>,
}

impl CadenceConfig {
    /// Resolves the Conduit API token from configuration or the legacy
    /// `API_TOKEN` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::MissingApiToken`] when no source provides a
    /// non-blank value.
    pub fn resolve_api_token(&self) -> Result<ConduitApiToken, ReportError> {
        let value = self
            .api_token
            .clone()
            .or_else(|| env::var("API_TOKEN").ok())
            .ok_or(ReportError::MissingApiToken)?;
        ConduitApiToken::new(value)
    }

    /// Resolves the bearer token from configuration or the legacy
    /// `BEARER_TOKEN` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::MissingBearerToken`] when no source provides
    /// a non-blank value.
    pub fn resolve_bearer_token(&self) -> Result<SessionBearerToken, ReportError> {
        let value = self
            .bearer_token
            .clone()
            .or_else(|| env::var("BEARER_TOKEN").ok())
            .ok_or(ReportError::MissingBearerToken)?;
        SessionBearerToken::new(value)
    }

    /// Returns the configured instance URL or the built-in default.
    #[must_use]
    pub fn resolve_instance_url(&self) -> &str {
        self.instance_url.as_deref().unwrap_or(DEFAULT_INSTANCE_URL)
    }
}
