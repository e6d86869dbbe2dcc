//! App struct and the overall flow

use std::io::Write;
use std::path::{Path, PathBuf};

use git2::Repository;
use log::{info, warn};

use super::{AppError, report};
use crate::config::Config;
use crate::git::{self, CloneOptions, FetchOutcome};
use crate::model::RepoInfo;
use crate::pipeline::{self, CompareRequest, Outcome, OutputTarget};
use crate::ui::{Formatter, Selector};
use crate::workspace::Workspace;

const TITLE: &str = "Git Compare";

/// One run of the tool
///
/// Output goes to `out`; endpoints not given in the config are asked from
/// `selector`.
pub struct App<W: Write, S: Selector> {
    pub(super) config: Config,
    pub(super) fmt: Formatter,
    pub(super) out: W,
    pub(super) selector: S,
}

impl<W: Write, S: Selector> App<W, S> {
    pub fn new(config: Config, out: W, selector: S) -> Self {
        let fmt = Formatter::new(config.color);
        Self {
            config,
            fmt,
            out,
            selector,
        }
    }

    /// Everything written so far
    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn selector(&self) -> &S {
        &self.selector
    }

    /// Clone, pick endpoints, compare and archive
    ///
    /// The workspace is released on every path; a failure to delete it is
    /// only reported.
    pub fn run(&mut self) -> Result<Outcome, AppError> {
        let repo_info = RepoInfo::parse(&self.config.repo_url)?;
        let workspace =
            Workspace::create(self.config.keep_workspace).map_err(AppError::Workspace)?;

        let result = self.run_in(&repo_info, &workspace);
        let released = self.release(workspace);
        let outcome = result?;
        released?;
        Ok(outcome)
    }

    fn run_in(&mut self, repo_info: &RepoInfo, workspace: &Workspace) -> Result<Outcome, AppError> {
        self.say(self.fmt.header(TITLE))?;
        self.say(self.fmt.field("Repository:", &repo_info.url))?;
        self.say(self.fmt.field(
            "Project:   ",
            &format!("{} ({})", repo_info.project(), repo_info.protocol),
        ))?;
        if workspace.is_retained() {
            info!("working copy will be kept at {}", workspace.path().display());
        }

        let options =
            CloneOptions::new(&repo_info.url).with_auth_token(self.config.auth_token.clone());
        let repo = self.acquire(&options, &workspace.repo_path())?;

        let (start_ref, end_ref) = self.endpoints(&repo)?;
        info!("comparing {} to {}", start_ref, end_ref);
        let request = CompareRequest {
            start_ref: &start_ref,
            end_ref: &end_ref,
            output: self.output_target(repo_info),
        };

        let fmt = self.fmt;
        let out = &mut self.out;
        let outcome = pipeline::compare(&repo, &request, &mut |stage| {
            report::stage(&fmt, out, stage, &request)
        })?;

        report::outcome(&self.fmt, &mut self.out, &outcome, &request).map_err(AppError::Output)?;
        Ok(outcome)
    }

    fn acquire(
        &mut self,
        options: &CloneOptions,
        destination: &Path,
    ) -> Result<Repository, AppError> {
        self.say(self.fmt.section("Cloning repository"))?;

        let fmt = self.fmt;
        let show_progress = self.config.progress;
        let out = &mut self.out;
        let mut last_percent = None;
        let cloned = git::acquire(options, destination, |progress| {
            let percent = progress.percent();
            if !show_progress || last_percent == Some(percent) {
                return;
            }
            last_percent = Some(percent);
            // redraw failures do not abort the clone
            if write!(out, "\r{}", fmt.transfer(progress)).is_ok() {
                let _ = out.flush();
            }
        });
        if show_progress && last_percent.is_some() {
            writeln!(self.out).map_err(AppError::Output)?;
        }
        let repo = cloned?;
        self.say(self.fmt.success("Repository cloned"))?;

        if let FetchOutcome::Skipped(reason) = git::refresh_remote_branches(&repo, options) {
            self.say(self.fmt.warning(&format!(
                "Could not fetch all branches ({}); using the cloned refs",
                reason
            )))?;
        }
        Ok(repo)
    }

    fn output_target(&self, repo_info: &RepoInfo) -> OutputTarget {
        match &self.config.output {
            Some(path) => OutputTarget::Path(path.clone()),
            None => OutputTarget::Generated {
                repo_name: repo_info.name.clone(),
                dir: PathBuf::new(),
            },
        }
    }

    fn release(&mut self, workspace: Workspace) -> Result<(), AppError> {
        match workspace.close() {
            Ok(None) => Ok(()),
            Ok(Some(kept)) => self.say(
                self.fmt
                    .info(&format!("Working copy kept at {}", kept.display())),
            ),
            Err(err) => {
                warn!("failed to remove workspace: {}", err);
                self.say(
                    self.fmt
                        .warning(&format!("Failed to remove temporary files: {}", err)),
                )
            }
        }
    }

    pub(super) fn say(&mut self, text: String) -> Result<(), AppError> {
        writeln!(self.out, "{}", text).map_err(AppError::Output)
    }
}
