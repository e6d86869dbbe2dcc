//! TestRepo helper for integration tests.
//!
//! Provides a temporary Git repository whose default branch is `main`.

use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};

use git2::build::CheckoutBuilder;
use git2::{IndexAddOption, Oid, Repository, RepositoryInitOptions, Signature, Time};
use tempfile::TempDir;

/// Commit timestamps start here and advance one minute per commit
const EPOCH: i64 = 1_700_000_000;

/// A temporary Git repository for testing.
///
/// The repository is automatically cleaned up when the TestRepo is dropped.
pub struct TestRepo {
    dir: TempDir,
    repo: Repository,
    clock: Cell<i64>,
}

impl TestRepo {
    /// Create an empty repository with `main` as its unborn branch.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let mut options = RepositoryInitOptions::new();
        options.initial_head("main");
        let repo = Repository::init_opts(dir.path(), &options).expect("Failed to init repository");

        Self {
            dir,
            repo,
            clock: Cell::new(EPOCH),
        }
    }

    /// Get the path to the repository root.
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Source URL for cloning this repository.
    pub fn url(&self) -> String {
        self.dir.path().to_string_lossy().into_owned()
    }

    pub fn repo(&self) -> &Repository {
        &self.repo
    }

    /// Write a file in the working copy, creating parent directories.
    pub fn write_file(&self, path: &str, content: &str) {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).expect("Failed to create directories");
        }
        fs::write(full, content).expect("Failed to write file");
    }

    pub fn remove_file(&self, path: &str) {
        fs::remove_file(self.dir.path().join(path)).expect("Failed to remove file");
    }

    /// Move a file inside the working copy.
    pub fn rename_file(&self, from: &str, to: &str) {
        let target = self.dir.path().join(to);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).expect("Failed to create directories");
        }
        fs::rename(self.dir.path().join(from), target).expect("Failed to rename file");
    }

    /// Stage everything (including deletions) and commit on HEAD.
    pub fn commit(&self, message: &str) -> Oid {
        let mut index = self.repo.index().expect("Failed to open index");
        index
            .add_all(["*"], IndexAddOption::DEFAULT, None)
            .expect("Failed to stage files");
        index
            .update_all(["*"], None)
            .expect("Failed to stage deletions");
        index.write().expect("Failed to write index");

        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let seconds = self.clock.get();
        self.clock.set(seconds + 60);
        let signature = Signature::new("Test User", "test@example.com", &Time::new(seconds, 0))
            .expect("Failed to build signature");

        let parent = self
            .repo
            .head()
            .ok()
            .and_then(|head| head.peel_to_commit().ok());
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)
            .expect("Failed to commit")
    }

    /// Create a branch at HEAD.
    pub fn branch(&self, name: &str) {
        let head = self.head_commit();
        self.repo
            .branch(name, &head, false)
            .expect("Failed to create branch");
    }

    /// Switch the working copy and HEAD to a local branch.
    pub fn checkout(&self, name: &str) {
        let reference = format!("refs/heads/{}", name);
        let object = self
            .repo
            .revparse_single(&reference)
            .expect("Branch not found");
        self.repo
            .checkout_tree(&object, Some(CheckoutBuilder::new().force()))
            .expect("Failed to check out tree");
        self.repo.set_head(&reference).expect("Failed to set HEAD");
    }

    /// Create a lightweight tag at HEAD.
    pub fn tag(&self, name: &str) {
        let head = self.head_commit();
        self.repo
            .tag_lightweight(name, head.as_object(), false)
            .expect("Failed to create tag");
    }

    pub fn head(&self) -> Oid {
        self.head_commit().id()
    }

    fn head_commit(&self) -> git2::Commit<'_> {
        self.repo
            .head()
            .and_then(|head| head.peel_to_commit())
            .expect("HEAD has no commit")
    }

    /// Clone this repository into `destination` with the library's clone.
    pub fn clone_into(&self, destination: &Path) -> Repository {
        let options = gitcompare::git::CloneOptions::new(self.url());
        gitcompare::git::acquire(&options, destination, |_| {}).expect("Failed to clone")
    }
}
