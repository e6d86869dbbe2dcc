//! Git access layer
//!
//! This module wraps libgit2: acquisition of the working copy, ref
//! resolution, tree diffing, and branch/commit listing.

mod acquire;
mod branches;
mod commits;
pub mod constants;
mod diff;
mod resolve;

pub use acquire::{Auth, CloneOptions, FetchOutcome, TransferProgress, acquire, refresh_remote_branches};
pub use branches::list_branches;
pub use commits::{commit_info, list_commits};
pub use diff::{checkout_commit, detect_changes, validate_refs};
pub use resolve::{ref_candidates, resolve};

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when working with a repository
#[derive(Error, Debug)]
pub enum GitError {
    #[error("failed to open repository at {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    #[error("failed to clone {url}: {source}")]
    Acquisition {
        url: String,
        #[source]
        source: git2::Error,
    },

    #[error("no usable credentials: {0}")]
    Credentials(String),

    #[error("reference not found: {0}")]
    RefNotFound(String),

    #[error("start reference {start} is not an ancestor of end reference {end}")]
    NotAncestor { start: String, end: String },

    #[error("failed to check ancestry: {0}")]
    Ancestry(#[source] git2::Error),

    #[error("failed to read tree of commit {commit}: {source}")]
    TreeRead {
        commit: String,
        #[source]
        source: git2::Error,
    },

    #[error("failed to diff trees: {0}")]
    Diff(#[source] git2::Error),

    #[error("failed to check out commit {commit}: {source}")]
    Checkout {
        commit: String,
        #[source]
        source: git2::Error,
    },

    #[error("failed to list branches: {0}")]
    Branches(#[source] git2::Error),

    #[error("failed to list commits of {reference}: {source}")]
    Commits {
        reference: String,
        #[source]
        source: git2::Error,
    },
}

/// Open an existing repository (working copy or bare)
pub fn open(path: impl Into<PathBuf>) -> Result<git2::Repository, GitError> {
    let path = path.into();
    git2::Repository::open(&path).map_err(|source| GitError::Open { path, source })
}
