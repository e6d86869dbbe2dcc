//! File change data model

/// A single file-level difference between two trees
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    /// Path on the end side (last-known path for deletions)
    pub path: String,

    /// Kind of the change
    pub kind: ChangeKind,
}

impl Change {
    pub fn added(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: ChangeKind::Added,
        }
    }

    pub fn modified(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: ChangeKind::Modified,
        }
    }

    pub fn deleted(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: ChangeKind::Deleted,
        }
    }

    pub fn renamed(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            path: to.into(),
            kind: ChangeKind::Renamed { from: from.into() },
        }
    }

    /// Original path of a renamed file
    pub fn old_path(&self) -> Option<&str> {
        match &self.kind {
            ChangeKind::Renamed { from } => Some(from),
            _ => None,
        }
    }

    /// Whether the change leaves a file behind in the end tree
    pub fn has_content(&self) -> bool {
        !matches!(self.kind, ChangeKind::Deleted)
    }
}

/// Classification of a path's difference between two trees
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeKind {
    /// Only the end side has the path
    Added,

    /// Both sides have the path
    Modified,

    /// Only the start side has the path
    Deleted,

    /// Both sides have a path but the paths differ
    Renamed {
        /// Start-side path
        from: String,
    },
}

impl ChangeKind {
    /// Lower-case name used in logs and reports
    pub fn label(&self) -> &'static str {
        match self {
            ChangeKind::Added => "added",
            ChangeKind::Modified => "modified",
            ChangeKind::Deleted => "deleted",
            ChangeKind::Renamed { .. } => "renamed",
        }
    }
}

/// Count changes of the same kind (rename sources are ignored)
pub fn count_by_kind(changes: &[Change], kind: &ChangeKind) -> usize {
    changes
        .iter()
        .filter(|c| std::mem::discriminant(&c.kind) == std::mem::discriminant(kind))
        .count()
}
