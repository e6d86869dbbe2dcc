//! Archive layer
//!
//! Output naming and the ZIP builder that packages changed files.

mod builder;
mod naming;

pub use builder::{ArchiveSummary, build_archive, entry_name};
pub use naming::{ensure_output_dir, generate_output_name, generate_output_name_at};

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing an archive
///
/// Any of these means no usable archive was produced.
#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write archive entry {entry}: {source}")]
    Write {
        entry: String,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("failed to finalize archive: {0}")]
    Finish(#[source] zip::result::ZipError),

    #[error("refusing to archive path outside the working copy: {0}")]
    UnsafePath(String),
}
