//! Compare pipeline
//!
//! Runs on an acquired working copy: validate both endpoints, detect the
//! changes between them, and package the surviving files into an archive.
//! Any failure stops the pipeline; nothing downstream of it runs.

use std::io;
use std::path::{Path, PathBuf};

use git2::Repository;
use log::info;
use thiserror::Error;

use crate::archive::{self, ArchiveError, ArchiveSummary};
use crate::git::{self, GitError};
use crate::model::{Change, ChangeKind, CommitId, count_by_kind};

/// Errors that stop the pipeline
#[derive(Error, Debug)]
pub enum CompareError {
    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Archive(#[from] ArchiveError),

    #[error("repository has no working copy")]
    NoWorkingCopy,

    #[error("failed to report progress: {0}")]
    Report(#[from] io::Error),
}

/// Where the archive goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Explicit path given by the user
    Path(PathBuf),
    /// Generated name inside `dir`
    Generated { repo_name: String, dir: PathBuf },
}

impl OutputTarget {
    fn resolve(&self, start_ref: &str, end_ref: &str) -> PathBuf {
        match self {
            OutputTarget::Path(path) => path.clone(),
            OutputTarget::Generated { repo_name, dir } => {
                dir.join(archive::generate_output_name(repo_name, start_ref, end_ref))
            }
        }
    }
}

/// Endpoints and output of one comparison
#[derive(Debug, Clone)]
pub struct CompareRequest<'a> {
    pub start_ref: &'a str,
    pub end_ref: &'a str,
    pub output: OutputTarget,
}

/// Progress events emitted while the pipeline runs
#[derive(Debug, Clone, Copy)]
pub enum Stage<'a> {
    Validating,
    Validated {
        start: CommitId,
        end: CommitId,
    },
    Comparing,
    Changes {
        start: CommitId,
        end: CommitId,
        changes: &'a [Change],
    },
    Archiving {
        output: &'a Path,
    },
}

/// Terminal state of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The trees are identical; no archive was written
    NoChanges { start: CommitId, end: CommitId },
    Archived(ArchiveReport),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveReport {
    pub start: CommitId,
    pub end: CommitId,
    pub changes: Vec<Change>,
    pub output: PathBuf,
    pub summary: ArchiveSummary,
}

/// Run the pipeline against an acquired working copy
///
/// The working copy is moved to the end commit before archiving so that the
/// archived bytes are the end tree's.
pub fn compare(
    repo: &Repository,
    request: &CompareRequest<'_>,
    observer: &mut dyn FnMut(Stage<'_>) -> io::Result<()>,
) -> Result<Outcome, CompareError> {
    let workdir = repo.workdir().ok_or(CompareError::NoWorkingCopy)?;

    observer(Stage::Validating)?;
    let (start, end) = git::validate_refs(repo, request.start_ref, request.end_ref)?;
    observer(Stage::Validated { start, end })?;

    observer(Stage::Comparing)?;
    let changes = git::detect_changes(repo, start, end)?;
    if changes.is_empty() {
        info!("no changes between {} and {}", start.short(), end.short());
        return Ok(Outcome::NoChanges { start, end });
    }
    info!(
        "{} added, {} modified, {} renamed, {} deleted",
        count_by_kind(&changes, &ChangeKind::Added),
        count_by_kind(&changes, &ChangeKind::Modified),
        count_by_kind(&changes, &ChangeKind::Renamed { from: String::new() }),
        count_by_kind(&changes, &ChangeKind::Deleted)
    );
    observer(Stage::Changes {
        start,
        end,
        changes: &changes,
    })?;

    git::checkout_commit(repo, end)?;

    let output = request.output.resolve(request.start_ref, request.end_ref);
    observer(Stage::Archiving { output: &output })?;
    let summary = archive::build_archive(workdir, &changes, &output)?;

    Ok(Outcome::Archived(ArchiveReport {
        start,
        end,
        changes,
        output,
        summary,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_output_is_used_as_is() {
        let target = OutputTarget::Path(PathBuf::from("out/changes.zip"));
        assert_eq!(target.resolve("main", "dev"), PathBuf::from("out/changes.zip"));
    }

    #[test]
    fn test_generated_output_lands_in_dir() {
        let target = OutputTarget::Generated {
            repo_name: "tool".to_string(),
            dir: PathBuf::from("exports"),
        };
        let path = target.resolve("v1.0", "feature/x");

        assert_eq!(path.parent(), Some(Path::new("exports")));
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("tool_v1.0_to_feature_x_"));
        assert!(name.ends_with(".zip"));
    }

    #[test]
    fn test_bare_repository_is_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let repo = Repository::init_bare(dir.path()).unwrap();
        let request = CompareRequest {
            start_ref: "main",
            end_ref: "main",
            output: OutputTarget::Path(dir.path().join("out.zip")),
        };

        let result = compare(&repo, &request, &mut |_| Ok(()));
        assert!(matches!(result, Err(CompareError::NoWorkingCopy)));
    }
}
