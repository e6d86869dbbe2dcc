//! Ref resolution
//!
//! Turns a user-supplied string (branch, tag, short or full hash) into a
//! commit, trying several ref namespaces in a fixed priority order.

use git2::Repository;
use log::{debug, trace};

use super::GitError;
use super::constants::refs;
use crate::model::CommitId;

/// Candidate forms of `reference`, in the order they are tried
///
/// Literal revisions (hashes, exact refs) come first so that an ambiguous
/// string is read as a hash before it is read as a branch or tag name.
pub fn ref_candidates(reference: &str) -> [String; 5] {
    [
        reference.to_string(),
        format!("{}{}", refs::HEADS, reference),
        format!("{}{}", refs::REMOTES_ORIGIN, reference),
        format!("{}{}", refs::ORIGIN_SHORTHAND, reference),
        format!("{}{}", refs::TAGS, reference),
    ]
}

/// Resolve a reference to the commit it names
///
/// The first candidate from [`ref_candidates`] that peels to a commit wins.
pub fn resolve(repo: &Repository, reference: &str) -> Result<CommitId, GitError> {
    if reference.trim().is_empty() {
        return Err(GitError::RefNotFound(reference.to_string()));
    }

    for candidate in ref_candidates(reference) {
        match repo
            .revparse_single(&candidate)
            .and_then(|object| object.peel_to_commit())
        {
            Ok(commit) => {
                debug!("resolved {} via {} to {}", reference, candidate, commit.id());
                return Ok(CommitId::new(commit.id()));
            }
            Err(err) => trace!("{} does not resolve: {}", candidate, err.message()),
        }
    }

    Err(GitError::RefNotFound(reference.to_string()))
}
