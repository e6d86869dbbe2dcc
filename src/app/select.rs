//! Choosing the comparison endpoints

use std::io::{self, Write};

use chrono::Utc;
use git2::Repository;
use log::info;

use super::{App, AppError};
use crate::git;
use crate::ui::{Selector, branch_option, commit_option};

const START_PROMPT: &str = "Select START commit (older commit):";
const END_PROMPT: &str = "Select END commit (newer commit):";

impl<W: Write, S: Selector> App<W, S> {
    /// Start and end refs, from the config or chosen interactively
    ///
    /// Refs chosen from the commit list are full hashes. When only `end` is
    /// configured its history is offered for the start.
    pub(super) fn endpoints(&mut self, repo: &Repository) -> Result<(String, String), AppError> {
        if let (Some(start), Some(end)) = (&self.config.start, &self.config.end) {
            info!("endpoints given: {} and {}", start, end);
            return Ok((start.clone(), end.clone()));
        }

        let branch = match self.config.end.clone() {
            Some(end) => end,
            None => self.choose_branch(repo)?,
        };

        let commits = git::list_commits(repo, &branch, self.config.commit_limit)?;
        if commits.is_empty() {
            return Err(AppError::NoCommits(branch));
        }
        let now = Utc::now();
        self.say(self.fmt.commits(&commits, now))?;
        let labels: Vec<String> = commits.iter().map(|c| commit_option(c, now)).collect();

        let start = match self.config.start.clone() {
            Some(start) => start,
            None => {
                let index = self.choose("Start Commit", START_PROMPT, &labels)?;
                commits[index].id.full()
            }
        };
        let end = match self.config.end.clone() {
            Some(end) => end,
            None => {
                let index = self.choose("End Commit", END_PROMPT, &labels)?;
                commits[index].id.full()
            }
        };

        self.say(self.fmt.success(&format!("Comparing {} to {}", start, end)))?;
        Ok((start, end))
    }

    fn choose_branch(&mut self, repo: &Repository) -> Result<String, AppError> {
        let branches = git::list_branches(repo)?;
        if branches.is_empty() {
            return Err(AppError::NoBranches);
        }
        let now = Utc::now();
        self.say(self.fmt.branches(&branches, now))?;

        let labels: Vec<String> = branches.iter().map(|b| branch_option(b, now)).collect();
        let index = self.choose("Branch", "Select the branch to compare:", &labels)?;
        let name = branches[index].name.clone();

        self.say(self.fmt.success(&format!("Selected branch: {}", name)))?;
        Ok(name)
    }

    /// Ask the selector; the returned index is always in range
    fn choose(&mut self, title: &str, message: &str, options: &[String]) -> Result<usize, AppError> {
        match self
            .selector
            .choose(title, message, options)
            .map_err(AppError::Selection)?
        {
            Some(index) if index < options.len() => Ok(index),
            Some(index) => Err(AppError::Selection(io::Error::other(format!(
                "option {} out of range",
                index
            )))),
            None => Err(AppError::SelectionCancelled),
        }
    }
}
