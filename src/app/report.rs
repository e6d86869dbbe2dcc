//! Printing pipeline stages and the final result

use std::io::{self, Write};
use std::path;

use crate::model::CommitId;
use crate::pipeline::{CompareRequest, Outcome, Stage};
use crate::ui::Formatter;

pub(super) fn stage(
    fmt: &Formatter,
    out: &mut impl Write,
    stage: Stage<'_>,
    request: &CompareRequest<'_>,
) -> io::Result<()> {
    match stage {
        Stage::Validating => writeln!(out, "{}", fmt.section("Validating commits")),
        Stage::Validated { start, end } => writeln!(
            out,
            "{}",
            fmt.success(&format!("Commits valid: {} → {}", start.short(), end.short()))
        ),
        Stage::Comparing => writeln!(out, "{}", fmt.section("Comparing commits")),
        Stage::Changes {
            start,
            end,
            changes,
        } => {
            writeln!(
                out,
                "{}",
                fmt.summary(request.start_ref, start, request.end_ref, end, changes.len())
            )?;
            writeln!(out, "{}", fmt.changes(changes))
        }
        Stage::Archiving { output } => {
            writeln!(out, "{}", fmt.section("Creating archive"))?;
            writeln!(out, "{}", fmt.field("Output:", &output.display().to_string()))
        }
    }
}

pub(super) fn outcome(
    fmt: &Formatter,
    out: &mut impl Write,
    outcome: &Outcome,
    request: &CompareRequest<'_>,
) -> io::Result<()> {
    match outcome {
        Outcome::NoChanges { start, end } => writeln!(
            out,
            "{}",
            fmt.warning(&format!(
                "No changes between {} and {}; no archive written",
                endpoint(request.start_ref, *start),
                endpoint(request.end_ref, *end)
            ))
        ),
        Outcome::Archived(report) => {
            let location = path::absolute(&report.output).unwrap_or_else(|_| report.output.clone());
            writeln!(out, "{}", fmt.section("Done"))?;
            writeln!(out, "{}", fmt.success("Archive created"))?;
            writeln!(out, "{}", fmt.field("File:    ", &location.display().to_string()))?;
            writeln!(out, "{}", fmt.field("Changed: ", &report.changes.len().to_string()))?;
            writeln!(
                out,
                "{}",
                fmt.field("Archived:", &report.summary.entries.len().to_string())
            )?;
            if !report.summary.missing.is_empty() {
                writeln!(
                    out,
                    "{}",
                    fmt.warning(&format!(
                        "{} changed path(s) had no file in the working copy",
                        report.summary.missing.len()
                    ))
                )?;
            }
            Ok(())
        }
    }
}

/// `ref (short)`, or just the short hash when the ref is the hash itself
fn endpoint(reference: &str, id: CommitId) -> String {
    if id.full().starts_with(reference) {
        id.short()
    } else {
        format!("{} ({})", reference, id.short())
    }
}
