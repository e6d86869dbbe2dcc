//! Change detection between two commits
//!
//! The structural diff and rename detection come from libgit2; this module
//! only classifies the resulting deltas.

use std::path::Path;

use git2::{Delta, DiffDelta, DiffFindOptions, DiffOptions, Repository, Tree, build::CheckoutBuilder};
use log::{debug, info, trace};

use super::{GitError, resolve};
use crate::model::{Change, CommitId};

/// Resolve both endpoints and check that `start` is an ancestor of `end`
///
/// Identical commits are accepted; a start that is not reachable from the
/// end makes "changed files between them" ill-defined and is rejected.
pub fn validate_refs(
    repo: &Repository,
    start_ref: &str,
    end_ref: &str,
) -> Result<(CommitId, CommitId), GitError> {
    let start = resolve(repo, start_ref)?;
    let end = resolve(repo, end_ref)?;

    if start != end {
        let is_ancestor = repo
            .graph_descendant_of(end.oid(), start.oid())
            .map_err(GitError::Ancestry)?;
        if !is_ancestor {
            return Err(GitError::NotAncestor {
                start: start_ref.to_string(),
                end: end_ref.to_string(),
            });
        }
    }

    info!("validated {} ({}) .. {} ({})", start_ref, start.short(), end_ref, end.short());
    Ok((start, end))
}

/// Compute the file-level changes between the trees of two commits
///
/// Output order is the diff's traversal order, which is stable for a given
/// pair of commits.
pub fn detect_changes(
    repo: &Repository,
    start: CommitId,
    end: CommitId,
) -> Result<Vec<Change>, GitError> {
    let start_tree = commit_tree(repo, start)?;
    let end_tree = commit_tree(repo, end)?;

    let mut options = DiffOptions::new();
    options.include_typechange(true);
    let mut diff = repo
        .diff_tree_to_tree(Some(&start_tree), Some(&end_tree), Some(&mut options))
        .map_err(GitError::Diff)?;

    let mut find = DiffFindOptions::new();
    find.renames(true);
    diff.find_similar(Some(&mut find)).map_err(GitError::Diff)?;

    let changes: Vec<Change> = diff.deltas().filter_map(|delta| classify(&delta)).collect();
    for change in &changes {
        trace!("{} {}", change.kind.label(), change.path);
    }
    debug!("{} changes between {} and {}", changes.len(), start.short(), end.short());
    Ok(changes)
}

/// Force the working copy to the tree of `commit` and detach HEAD there
pub fn checkout_commit(repo: &Repository, commit: CommitId) -> Result<(), GitError> {
    let checkout_error = |source: git2::Error| GitError::Checkout {
        commit: commit.full(),
        source,
    };
    let object = repo.find_commit(commit.oid()).map_err(checkout_error)?;

    let mut builder = CheckoutBuilder::new();
    builder.force();
    repo.checkout_tree(object.as_object(), Some(&mut builder))
        .map_err(checkout_error)?;
    repo.set_head_detached(commit.oid()).map_err(checkout_error)?;

    debug!("checked out {}", commit.short());
    Ok(())
}

fn commit_tree(repo: &Repository, commit: CommitId) -> Result<Tree<'_>, GitError> {
    repo.find_commit(commit.oid())
        .and_then(|c| c.tree())
        .map_err(|source| GitError::TreeRead {
            commit: commit.full(),
            source,
        })
}

/// Map a delta onto a change kind
fn classify(delta: &DiffDelta<'_>) -> Option<Change> {
    let old_path = delta.old_file().path().map(path_string);
    let new_path = delta.new_file().path().map(path_string);

    match delta.status() {
        Delta::Added | Delta::Copied => new_path.map(Change::added),
        Delta::Deleted => old_path.map(Change::deleted),
        Delta::Modified | Delta::Typechange => new_path.or(old_path).map(Change::modified),
        Delta::Renamed => match (old_path, new_path) {
            (Some(from), Some(to)) if from != to => Some(Change::renamed(from, to)),
            (_, Some(to)) => Some(Change::modified(to)),
            (from, None) => from.map(Change::modified),
        },
        // Unmodified, ignored, untracked and unreadable deltas do not occur
        // between two committed trees.
        _ => None,
    }
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
