//! ZIP archive builder
//!
//! Packages the current working-copy bytes of changed files. Deleted paths
//! and paths missing from the working copy produce no entry.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, Seek, Write};
use std::path::{Component, Path};

use log::{debug, info, warn};
use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use super::{ArchiveError, ensure_output_dir};
use crate::model::Change;

/// Permissions recorded for every entry
const ENTRY_PERMISSIONS: u32 = 0o644;

/// What ended up in the archive
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchiveSummary {
    /// Entry names in the order they were written
    pub entries: Vec<String>,
    /// Non-deleted changes that had no file in the working copy
    pub missing: Vec<String>,
}

/// A working-copy path worth archiving
enum Source {
    File,
    /// Stored as a link entry holding the target; never followed
    Link(String),
}

/// Write a ZIP of the changed files under `root` to `output`
///
/// Entry timestamps and permissions are fixed, so identical inputs produce
/// byte-identical archives. Symlinks are archived as links. A path that
/// resolves outside `root` is an [`ArchiveError::UnsafePath`]. On error the
/// partially written file is removed.
pub fn build_archive(
    root: &Path,
    changes: &[Change],
    output: &Path,
) -> Result<ArchiveSummary, ArchiveError> {
    let root = root.canonicalize().map_err(|source| ArchiveError::Read {
        path: root.to_path_buf(),
        source,
    })?;

    let create_error = |source: io::Error| ArchiveError::Create {
        path: output.to_path_buf(),
        source,
    };
    ensure_output_dir(output).map_err(create_error)?;
    let file = File::create(output).map_err(create_error)?;

    let cleanup = scopeguard::guard(output.to_path_buf(), |path| {
        if let Err(err) = fs::remove_file(&path) {
            warn!("failed to remove partial archive {}: {}", path.display(), err);
        }
    });

    let mut zip = ZipWriter::new(file);
    let summary = write_entries(&mut zip, &root, changes)?;
    zip.finish().map_err(ArchiveError::Finish)?;
    scopeguard::ScopeGuard::into_inner(cleanup);

    info!("wrote {} entries to {}", summary.entries.len(), output.display());
    Ok(summary)
}

/// Add one entry per distinct non-deleted change; `root` must be canonical
fn write_entries<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    root: &Path,
    changes: &[Change],
) -> Result<ArchiveSummary, ArchiveError> {
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .unix_permissions(ENTRY_PERMISSIONS);

    let mut summary = ArchiveSummary::default();
    let mut written = HashSet::new();

    for change in changes.iter().filter(|c| c.has_content()) {
        let entry = entry_name(&change.path)?;
        if written.contains(&entry) {
            debug!("skipping duplicate entry {}", entry);
            continue;
        }

        let source_path = root.join(&change.path);
        let Some(kind) = inspect(root, &source_path, &change.path)? else {
            debug!("skipping {}: no file in the working copy", change.path);
            summary.missing.push(change.path.clone());
            continue;
        };

        let write_error = |source: ZipError| ArchiveError::Write {
            entry: entry.clone(),
            source,
        };
        match kind {
            Source::Link(target) => {
                debug!("archiving {} as a link to {}", entry, target);
                zip.add_symlink(entry.as_str(), target, options)
                    .map_err(write_error)?;
            }
            Source::File => {
                let bytes = fs::read(&source_path).map_err(|source| ArchiveError::Read {
                    path: source_path.clone(),
                    source,
                })?;
                zip.start_file(entry.as_str(), options)
                    .map_err(write_error)?;
                zip.write_all(&bytes)
                    .map_err(|source| write_error(ZipError::Io(source)))?;
            }
        }

        written.insert(entry.clone());
        summary.entries.push(entry);
    }

    Ok(summary)
}

/// Classify `path` without following a final symlink
///
/// `None` means there is nothing to archive. The containing directory must
/// resolve inside `root`, so symlinked directories cannot leak host files.
fn inspect(root: &Path, path: &Path, display: &str) -> Result<Option<Source>, ArchiveError> {
    let Ok(metadata) = fs::symlink_metadata(path) else {
        return Ok(None);
    };
    let read_error = |source: io::Error| ArchiveError::Read {
        path: path.to_path_buf(),
        source,
    };

    let parent = path.parent().unwrap_or(root).canonicalize().map_err(read_error)?;
    if !parent.starts_with(root) {
        return Err(ArchiveError::UnsafePath(display.to_string()));
    }

    if metadata.file_type().is_symlink() {
        let target = fs::read_link(path).map_err(read_error)?;
        return Ok(Some(Source::Link(
            target.to_string_lossy().replace('\\', "/"),
        )));
    }
    Ok(metadata.is_file().then_some(Source::File))
}

/// Archive entry name for a repository path, using forward slashes
///
/// Absolute paths and paths with `..` components are rejected.
pub fn entry_name(path: &str) -> Result<String, ArchiveError> {
    let normalized = path.replace('\\', "/");
    let unsafe_path = || ArchiveError::UnsafePath(path.to_string());

    if normalized.is_empty() || normalized.starts_with('/') {
        return Err(unsafe_path());
    }
    for component in Path::new(&normalized).components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(unsafe_path());
            }
        }
    }

    Ok(normalized)
}
