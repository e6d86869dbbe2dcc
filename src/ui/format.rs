//! Text formatting for terminal output
//!
//! Every method returns the text without a trailing newline; callers decide
//! where it is written. With color disabled the text is plain.

use chrono::{DateTime, Local, TimeDelta, Utc};
use crossterm::style::{Color, Stylize};

use super::symbols::{empty, markers, status};
use super::theme::{changes as change_colors, output};
use crate::git::TransferProgress;
use crate::model::{Branch, Change, ChangeKind, CommitId, CommitInfo};
use crate::text::truncate;

/// Number of commits printed by [`Formatter::commits`]
pub const COMMIT_LIST_LIMIT: usize = 20;

/// Summary length in branch options
const BRANCH_OPTION_SUMMARY: usize = 50;

/// Summary length in commit options
const COMMIT_OPTION_SUMMARY: usize = 55;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Builds user-facing text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formatter {
    color: bool,
}

impl Formatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Formatter that never emits escape sequences
    pub fn plain() -> Self {
        Self::new(false)
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_bold(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Title with an `=` underline of the same width
    pub fn header(&self, title: &str) -> String {
        let underline: String =
            std::iter::repeat_n(markers::UNDERLINE, title.chars().count()).collect();
        format!(
            "\n{}\n{}",
            self.paint_bold(title, output::HEADER),
            self.paint_bold(&underline, output::HEADER)
        )
    }

    pub fn section(&self, title: &str) -> String {
        format!(
            "\n{}",
            self.paint_bold(&format!("{} {}", status::SECTION, title), output::INFO)
        )
    }

    pub fn success(&self, text: &str) -> String {
        self.paint_bold(&format!("{} {}", status::SUCCESS, text), output::SUCCESS)
    }

    pub fn error(&self, text: &str) -> String {
        self.paint_bold(&format!("{} {}", status::ERROR, text), output::ERROR)
    }

    pub fn warning(&self, text: &str) -> String {
        self.paint(&format!("{} {}", status::WARNING, text), output::WARNING)
    }

    pub fn info(&self, text: &str) -> String {
        self.paint(&format!("{} {}", status::INFO, text), output::INFO)
    }

    /// `label: value` with the value highlighted
    pub fn field(&self, label: &str, value: &str) -> String {
        format!("  {} {}", label, self.paint(value, output::FILE))
    }

    /// One-line clone progress, meant to be redrawn with `\r`
    pub fn transfer(&self, progress: &TransferProgress) -> String {
        let receiving_done = progress.received_objects == progress.total_objects;
        let detail = if progress.total_deltas > 0 && receiving_done {
            format!(
                "resolving deltas {}/{}",
                progress.indexed_deltas, progress.total_deltas
            )
        } else {
            format!(
                "receiving objects {}/{}",
                progress.received_objects, progress.total_objects
            )
        };
        format!(
            "  {} ({}, {} KiB)",
            self.paint_bold(&format!("{:>3}%", progress.percent()), output::COUNT),
            detail,
            progress.received_bytes / 1024
        )
    }

    /// Endpoints and number of changed files
    pub fn summary(
        &self,
        start_ref: &str,
        start: CommitId,
        end_ref: &str,
        end: CommitId,
        count: usize,
    ) -> String {
        let mut out = self.section("Comparison Summary");
        out.push_str(&format!(
            "\n  Start: {} ({})",
            start_ref,
            self.paint(&start.short(), output::COMMIT)
        ));
        out.push_str(&format!(
            "\n  End:   {} ({})",
            end_ref,
            self.paint(&end.short(), output::COMMIT)
        ));
        out.push_str(&format!(
            "\n  Files: {} changed",
            self.paint_bold(&count.to_string(), output::COUNT)
        ));
        out
    }

    /// Changes grouped by kind, in the order added, modified, renamed, deleted
    pub fn changes(&self, changes: &[Change]) -> String {
        if changes.is_empty() {
            return self.warning("No changes found");
        }

        let added = of_kind(changes, |k| matches!(k, ChangeKind::Added));
        let modified = of_kind(changes, |k| matches!(k, ChangeKind::Modified));
        let renamed = of_kind(changes, |k| matches!(k, ChangeKind::Renamed { .. }));
        let deleted = of_kind(changes, |k| matches!(k, ChangeKind::Deleted));

        let mut out = self.section(&format!("Changed Files ({} total)", changes.len()));
        self.push_group(&mut out, "Added", change_colors::ADDED, &added, |c| {
            format!("+ {}", c.path)
        });
        self.push_group(&mut out, "Modified", change_colors::MODIFIED, &modified, |c| {
            format!("~ {}", c.path)
        });
        self.push_group(&mut out, "Renamed", change_colors::RENAMED, &renamed, |c| {
            format!(
                "{} {} {}",
                c.old_path().unwrap_or_default(),
                markers::RENAME,
                c.path
            )
        });
        self.push_group(&mut out, "Deleted", change_colors::DELETED, &deleted, |c| {
            format!("- {}", c.path)
        });
        out
    }

    fn push_group(
        &self,
        out: &mut String,
        title: &str,
        color: Color,
        items: &[&Change],
        line: impl Fn(&Change) -> String,
    ) {
        if items.is_empty() {
            return;
        }
        out.push_str("\n\n");
        out.push_str(&self.paint_bold(&format!("  {} ({}):", title, items.len()), color));
        for change in items {
            out.push_str("\n      ");
            out.push_str(&self.paint(&line(*change), color));
        }
    }

    /// Local branches, then remote-only branches
    pub fn branches(&self, branches: &[Branch], now: DateTime<Utc>) -> String {
        let mut out = self.section("Available Branches");
        let (remote, local): (Vec<&Branch>, Vec<&Branch>) =
            branches.iter().partition(|b| b.is_remote);

        for (title, group) in [("Local branches:", &local), ("Remote branches:", &remote)] {
            if group.is_empty() {
                continue;
            }
            out.push_str("\n\n  ");
            out.push_str(title);
            for (i, branch) in group.iter().enumerate() {
                self.push_branch(&mut out, i + 1, branch, now);
            }
        }
        out
    }

    fn push_branch(&self, out: &mut String, number: usize, branch: &Branch, now: DateTime<Utc>) {
        let marker = if branch.is_head { markers::HEAD } else { ' ' };
        let suffix = if branch.is_head { " (current HEAD)" } else { "" };
        out.push_str(&format!(
            "\n    {}. {} {}{}",
            number,
            marker,
            self.paint_bold(&branch.name, output::BRANCH),
            suffix
        ));

        match &branch.last_commit {
            Some(commit) => {
                out.push_str(&format!(
                    "\n         {} - {} - {}",
                    self.paint(&commit.id.short(), output::COMMIT),
                    self.paint(&time_ago(commit.time, now), output::DIM),
                    commit.author
                ));
                out.push_str(&format!("\n         {}", commit.summary));
            }
            None => {
                out.push_str("\n         ");
                out.push_str(empty::NO_COMMIT);
            }
        }
    }

    /// The first [`COMMIT_LIST_LIMIT`] commits, newest first as given
    pub fn commits(&self, commits: &[CommitInfo], now: DateTime<Utc>) -> String {
        let shown = commits.len().min(COMMIT_LIST_LIMIT);
        let mut out = self.section(&format!(
            "Recent Commits (showing {} of {})",
            shown,
            commits.len()
        ));
        for (i, commit) in commits.iter().take(shown).enumerate() {
            let local = commit.time.with_timezone(&Local);
            out.push_str(&format!(
                "\n  {:>2}. {} - {} ({}) - {}",
                i + 1,
                self.paint(&commit.id.short(), output::COMMIT),
                time_ago(commit.time, now),
                self.paint(&local.format(DATE_TIME_FORMAT).to_string(), output::DIM),
                commit.author
            ));
            out.push_str(&format!("\n      {}", commit.summary));
        }
        out
    }
}

fn of_kind<'a>(changes: &'a [Change], wanted: fn(&ChangeKind) -> bool) -> Vec<&'a Change> {
    changes.iter().filter(|c| wanted(&c.kind)).collect()
}

/// Dialog label for a branch
pub fn branch_option(branch: &Branch, now: DateTime<Utc>) -> String {
    let mut parts = Vec::new();
    if branch.is_head {
        parts.push(markers::HEAD.to_string());
    }
    parts.push(branch.name.clone());
    if branch.is_remote {
        parts.push("(remote)".to_string());
    }
    if let Some(commit) = &branch.last_commit {
        parts.push(format!(
            "- {} ({}): {}",
            commit.id.short(),
            time_ago(commit.time, now),
            truncate(&commit.summary, BRANCH_OPTION_SUMMARY)
        ));
    }
    parts.join(" ")
}

/// Dialog label for a commit
pub fn commit_option(commit: &CommitInfo, now: DateTime<Utc>) -> String {
    format!(
        "{} - {} - {} - {}",
        commit.id.short(),
        time_ago(commit.time, now),
        commit.author,
        truncate(&commit.summary, COMMIT_OPTION_SUMMARY)
    )
}

/// Human-readable age of `then` relative to `now`
///
/// Anything older than 30 days is shown as a local date. Times in the future
/// count as "just now".
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);

    if elapsed < TimeDelta::minutes(1) {
        "just now".to_string()
    } else if elapsed < TimeDelta::hours(1) {
        units_ago(elapsed.num_minutes(), "minute")
    } else if elapsed < TimeDelta::days(1) {
        units_ago(elapsed.num_hours(), "hour")
    } else if elapsed < TimeDelta::weeks(1) {
        units_ago(elapsed.num_days(), "day")
    } else if elapsed < TimeDelta::days(30) {
        units_ago(elapsed.num_weeks(), "week")
    } else {
        then.with_timezone(&Local).format(DATE_FORMAT).to_string()
    }
}

fn units_ago(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}
