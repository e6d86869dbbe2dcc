//! Branch model for branch listing and selection

use super::CommitInfo;

/// A branch available in the working copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    /// Branch name without the remote prefix (e.g., "main", "feature/x")
    pub name: String,
    /// Whether this branch only exists on the remote
    pub is_remote: bool,
    /// Whether this branch is the checked-out HEAD
    pub is_head: bool,
    /// Tip commit, if it could be read
    pub last_commit: Option<CommitInfo>,
}

impl Branch {
    pub fn local(name: impl Into<String>, is_head: bool) -> Self {
        Self {
            name: name.into(),
            is_remote: false,
            is_head,
            last_commit: None,
        }
    }

    pub fn remote(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_remote: true,
            is_head: false,
            last_commit: None,
        }
    }

    pub fn with_last_commit(mut self, commit: Option<CommitInfo>) -> Self {
        self.last_commit = commit;
        self
    }
}
