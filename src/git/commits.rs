//! Commit history listing

use chrono::DateTime;
use git2::{Commit, Repository, Sort};

use super::constants::limits;
use super::{GitError, resolve};
use crate::model::{CommitId, CommitInfo};
use crate::text;

/// List up to `limit` commits reachable from `reference`, newest first
///
/// A `limit` of zero lists the whole history.
pub fn list_commits(
    repo: &Repository,
    reference: &str,
    limit: usize,
) -> Result<Vec<CommitInfo>, GitError> {
    let tip = resolve(repo, reference)?;
    let commits_error = |source: git2::Error| GitError::Commits {
        reference: reference.to_string(),
        source,
    };

    let mut walk = repo.revwalk().map_err(commits_error)?;
    walk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)
        .map_err(commits_error)?;
    walk.push(tip.oid()).map_err(commits_error)?;

    let limit = if limit == 0 { usize::MAX } else { limit };
    let mut commits = Vec::new();
    for oid in walk.take(limit) {
        let commit = repo
            .find_commit(oid.map_err(commits_error)?)
            .map_err(commits_error)?;
        commits.push(commit_info(&commit, limits::COMMIT_MESSAGE));
    }

    Ok(commits)
}

/// Build display information for a commit, cutting its summary to `max_summary`
pub fn commit_info(commit: &Commit<'_>, max_summary: usize) -> CommitInfo {
    let message = String::from_utf8_lossy(commit.message_bytes());
    let author = commit.author();

    CommitInfo {
        id: CommitId::new(commit.id()),
        summary: text::truncate(text::first_line(&message), max_summary),
        author: String::from_utf8_lossy(author.name_bytes()).into_owned(),
        time: DateTime::from_timestamp(author.when().seconds(), 0).unwrap_or_default(),
    }
}
