//! Phab-cadence CLI entrypoint for monthly activity reports.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use phab_cadence::{CadenceConfig, HttpConduitGateway, PhabricatorInstance, ReportError};

mod cli;

use cli::interactive;
use cli::prompt::ReadlinePrompter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ReportError> {
    let config = load_config()?;

    // Both credentials are resolved before any prompt is shown so a missing
    // one aborts with its remediation message alone.
    let api_token = config.resolve_api_token()?;
    let bearer_token = config.resolve_bearer_token()?;
    let instance = PhabricatorInstance::parse(config.resolve_instance_url())?;

    let gateway = HttpConduitGateway::for_credentials(instance, api_token, &bearer_token)?;
    let mut prompter = ReadlinePrompter::new()?;
    let mut stdout = io::stdout().lock();
    interactive::run_session(&gateway, &mut prompter, &mut stdout).await
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ReportError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<CadenceConfig, ReportError> {
    CadenceConfig::load().map_err(|error| ReportError::Configuration {
        message: error.to_string(),
    })
}
