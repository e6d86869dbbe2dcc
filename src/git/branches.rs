//! Branch listing

use git2::{BranchType, Repository};

use super::constants::{limits, refs};
use super::{GitError, commit_info};
use crate::model::{Branch, CommitInfo};

/// List local branches followed by remote-only branches
///
/// Remote branch names have their `<remote>/` prefix stripped; a remote
/// branch with a local counterpart of the same name is listed once, as local.
pub fn list_branches(repo: &Repository) -> Result<Vec<Branch>, GitError> {
    let mut branches = Vec::new();

    for entry in repo
        .branches(Some(BranchType::Local))
        .map_err(GitError::Branches)?
    {
        let (branch, _) = entry.map_err(GitError::Branches)?;
        let Some(name) = branch.name().map_err(GitError::Branches)? else {
            continue;
        };
        branches.push(Branch::local(name, branch.is_head()).with_last_commit(tip(&branch)));
    }

    for entry in repo
        .branches(Some(BranchType::Remote))
        .map_err(GitError::Branches)?
    {
        let (branch, _) = entry.map_err(GitError::Branches)?;
        let Some(full_name) = branch.name().map_err(GitError::Branches)? else {
            continue;
        };
        let name = full_name
            .split_once('/')
            .map_or(full_name, |(_remote, rest)| rest);
        if name == refs::HEAD || branches.iter().any(|b: &Branch| b.name == name) {
            continue;
        }
        branches.push(Branch::remote(name).with_last_commit(tip(&branch)));
    }

    Ok(branches)
}

fn tip(branch: &git2::Branch<'_>) -> Option<CommitInfo> {
    branch
        .get()
        .peel_to_commit()
        .ok()
        .map(|commit| commit_info(&commit, limits::BRANCH_SUMMARY))
}
