//! Commit data model

use std::fmt;

use chrono::{DateTime, Utc};
use git2::Oid;

/// Length of the abbreviated hash shown to users
pub const SHORT_HASH_LEN: usize = 7;

/// A resolved revision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommitId(Oid);

impl CommitId {
    pub fn new(oid: Oid) -> Self {
        Self(oid)
    }

    pub fn oid(&self) -> Oid {
        self.0
    }

    /// Full 40-character hex hash
    pub fn full(&self) -> String {
        self.0.to_string()
    }

    /// First seven hex characters of the full hash
    pub fn short(&self) -> String {
        let mut hash = self.full();
        hash.truncate(SHORT_HASH_LEN);
        hash
    }
}

impl From<Oid> for CommitId {
    fn from(oid: Oid) -> Self {
        Self::new(oid)
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A commit as offered for display and selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    pub id: CommitId,

    /// Single trimmed line of the message
    pub summary: String,

    /// Author name
    pub author: String,

    /// Author time
    pub time: DateTime<Utc>,
}
