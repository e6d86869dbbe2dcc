//! Data models for gitcompare
//!
//! This module contains UI-independent data structures representing
//! the repository, its branches and commits, and file changes.

mod branch;
mod change;
mod commit;
mod repo_info;

pub use branch::Branch;
pub use change::{Change, ChangeKind, count_by_kind};
pub use commit::{CommitId, CommitInfo, SHORT_HASH_LEN};
pub use repo_info::{Protocol, RepoInfo, UrlError, is_ssh_url};
