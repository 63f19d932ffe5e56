//! Output formatting for activity reports.

use std::io::{self, Write};

use phab_cadence::{MonthlyAverages, ReportError, UserPhid};

/// Which activity a report counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Revisions the user authored.
    Diffs,
    /// Revisions the user was assigned to review.
    Reviews,
}

impl ReportKind {
    /// Singular noun used in the report heading.
    #[must_use]
    pub const fn heading_noun(self) -> &'static str {
        match self {
            Self::Diffs => "Diff",
            Self::Reviews => "Review",
        }
    }

    /// Plural noun used in the per-window lines.
    #[must_use]
    pub const fn line_noun(self) -> &'static str {
        match self {
            Self::Diffs => "diffs",
            Self::Reviews => "reviews",
        }
    }
}

/// Writes the labelled five-line report block to the given writer.
///
/// All averages are formatted with two decimal places.
///
/// # Errors
///
/// Returns [`ReportError::Io`] when the writer fails.
pub fn write_activity_report<W: Write>(
    writer: &mut W,
    kind: ReportKind,
    username: &str,
    phid: &UserPhid,
    averages: &MonthlyAverages,
) -> Result<(), ReportError> {
    let noun = kind.line_noun();
    writeln!(writer).map_err(|e| io_error(&e))?;
    writeln!(
        writer,
        "Average {} Count for {username} ({phid})",
        kind.heading_noun()
    )
    .map_err(|e| io_error(&e))?;
    writeln!(writer).map_err(|e| io_error(&e))?;
    writeln!(
        writer,
        "Entire historical average number of monthly {noun}: {:.2}",
        averages.overall
    )
    .map_err(|e| io_error(&e))?;
    writeln!(
        writer,
        "Average number of {noun} in last month: {:.2}",
        averages.segmented.past_month
    )
    .map_err(|e| io_error(&e))?;
    writeln!(
        writer,
        "Average number of {noun} in last 3 months: {:.2}",
        averages.segmented.past_three_months
    )
    .map_err(|e| io_error(&e))?;
    writeln!(
        writer,
        "Average number of {noun} in last 6 months: {:.2}",
        averages.segmented.past_six_months
    )
    .map_err(|e| io_error(&e))?;
    writeln!(
        writer,
        "Average number of {noun} in last year: {:.2}",
        averages.segmented.past_year
    )
    .map_err(|e| io_error(&e))?;
    Ok(())
}

/// Converts an I/O error to a [`ReportError::Io`].
pub(crate) fn io_error(error: &io::Error) -> ReportError {
    ReportError::Io {
        message: error.to_string(),
    }
}
