//! Temporary workspace holding the working copy of one run

use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::TempDir;

/// Prefix of the temporary directory name
const TEMP_PREFIX: &str = "gitcompare-";

/// Subdirectory the repository is cloned into
const REPO_DIR: &str = "repo";

/// Directory owned by a single run
///
/// An ephemeral workspace is deleted when dropped (failure paths) or closed
/// (success path). A retained workspace stays on disk for inspection.
#[derive(Debug)]
pub enum Workspace {
    Ephemeral(TempDir),
    Retained(PathBuf),
}

impl Workspace {
    pub fn create(retain: bool) -> io::Result<Self> {
        let dir = tempfile::Builder::new().prefix(TEMP_PREFIX).tempdir()?;
        debug!("created workspace {}", dir.path().display());
        if retain {
            Ok(Workspace::Retained(dir.keep()))
        } else {
            Ok(Workspace::Ephemeral(dir))
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Workspace::Ephemeral(dir) => dir.path(),
            Workspace::Retained(path) => path,
        }
    }

    /// Where the working copy lives
    pub fn repo_path(&self) -> PathBuf {
        self.path().join(REPO_DIR)
    }

    pub fn is_retained(&self) -> bool {
        matches!(self, Workspace::Retained(_))
    }

    /// Release the workspace, reporting deletion errors
    ///
    /// Returns the path that was kept on disk, if any.
    pub fn close(self) -> io::Result<Option<PathBuf>> {
        match self {
            Workspace::Ephemeral(dir) => {
                debug!("removing workspace {}", dir.path().display());
                dir.close()?;
                Ok(None)
            }
            Workspace::Retained(path) => Ok(Some(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ephemeral_workspace_is_removed_on_close() {
        let workspace = Workspace::create(false).unwrap();
        let path = workspace.path().to_path_buf();
        std::fs::write(path.join("test.txt"), "test").unwrap();
        assert!(path.is_dir());

        assert_eq!(workspace.close().unwrap(), None);
        assert!(!path.exists());
    }

    #[test]
    fn test_ephemeral_workspace_is_removed_on_drop() {
        let workspace = Workspace::create(false).unwrap();
        let path = workspace.path().to_path_buf();
        drop(workspace);
        assert!(!path.exists());
    }

    #[test]
    fn test_retained_workspace_survives() {
        let workspace = Workspace::create(true).unwrap();
        assert!(workspace.is_retained());
        let path = workspace.path().to_path_buf();

        let kept = workspace.close().unwrap();
        assert_eq!(kept.as_deref(), Some(path.as_path()));
        assert!(path.is_dir());

        std::fs::remove_dir_all(&path).unwrap();
    }

    #[test]
    fn test_repo_path_is_inside_workspace() {
        let workspace = Workspace::create(false).unwrap();
        assert!(workspace.repo_path().starts_with(workspace.path()));
        assert!(
            workspace
                .path()
                .file_name()
                .unwrap()
                .to_string_lossy()
                .starts_with(TEMP_PREFIX)
        );
    }
}
