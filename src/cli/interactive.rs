//! Interactive report session.
//!
//! The session walks a fixed three-step flow: ask for a username (blank
//! means the authenticated caller), ask which report to run, then fetch,
//! aggregate, and render. Every exit path — success, unknown user, invalid
//! choice, or a failure from any earlier stage — returns through the same
//! caller, which drops the prompter and releases the interactive stream.

use std::io::Write;

use chrono::Utc;
use phab_cadence::{
    ActivityFeed, ConduitGateway, ReportError, UserDirectory, UserPhid, Username,
    monthly_averages,
};

use super::output::{self, ReportKind, write_activity_report};
use super::prompt::Prompter;

/// Runs one interactive report session against the given gateway.
///
/// # Errors
///
/// Returns [`ReportError::UserNotFound`] when the entered username has no
/// match, [`ReportError::InvalidChoice`] for menu input other than `1` or
/// `2`, and propagates gateway and I/O failures from any stage.
pub async fn run_session<Gateway, P, W>(
    gateway: &Gateway,
    prompter: &mut P,
    writer: &mut W,
) -> Result<(), ReportError>
where
    Gateway: ConduitGateway,
    P: Prompter,
    W: Write,
{
    let (username, phid) = resolve_subject(gateway, prompter, writer).await?;
    let kind = ask_report_kind(prompter, writer)?;

    let feed = ActivityFeed::new(gateway);
    let revisions = match kind {
        ReportKind::Diffs => feed.authored_by(&phid).await?,
        ReportKind::Reviews => feed.reviewed_by(&phid).await?,
    };

    let averages = monthly_averages(&revisions, Utc::now());
    write_activity_report(writer, kind, &username, &phid, &averages)
}

/// Prompts for a username and resolves it to a stable identifier.
///
/// Blank input selects the authenticated caller, echoing which user was
/// picked before the next prompt.
async fn resolve_subject<Gateway, P, W>(
    gateway: &Gateway,
    prompter: &mut P,
    writer: &mut W,
) -> Result<(String, UserPhid), ReportError>
where
    Gateway: ConduitGateway,
    P: Prompter,
    W: Write,
{
    writeln!(
        writer,
        "\nEnter Phabricator username or leave blank to use current user"
    )
    .map_err(|e| output::io_error(&e))?;
    let input = prompter.ask("> ")?;

    let directory = UserDirectory::new(gateway);
    let Some(name) = Username::new(&input) else {
        let profile = directory.current_user().await?;
        writeln!(writer, "Using {}\n", profile.username).map_err(|e| output::io_error(&e))?;
        return Ok((profile.username, profile.phid));
    };

    let phid = directory
        .resolve_by_username(&name)
        .await?
        .ok_or_else(|| ReportError::UserNotFound {
            username: name.as_str().to_owned(),
        })?;
    tracing::debug!("resolved {name} to {phid}");
    Ok((name.as_str().to_owned(), phid))
}

/// Prompts for the report type.
fn ask_report_kind<P, W>(prompter: &mut P, writer: &mut W) -> Result<ReportKind, ReportError>
where
    P: Prompter,
    W: Write,
{
    writeln!(
        writer,
        "\nSelect option:\n\n1. Get average monthly diff counts\n2. Get average monthly review counts"
    )
    .map_err(|e| output::io_error(&e))?;
    let choice = prompter.ask("> ")?;

    match choice.trim() {
        "1" => Ok(ReportKind::Diffs),
        "2" => Ok(ReportKind::Reviews),
        other => Err(ReportError::InvalidChoice {
            choice: other.to_owned(),
        }),
    }
}
