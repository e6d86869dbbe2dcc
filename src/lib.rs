//! gitcompare - export the files changed between two commits
//!
//! Clones a repository, resolves two endpoints, detects what changed between
//! them, and writes the changed files of the newer endpoint to a ZIP archive.
//!
//! This library provides:
//! - [`app`]: The interactive run, from URL to archive
//! - [`archive`]: ZIP packaging and output naming
//! - [`cli`] / [`config`]: Command-line flags and run configuration
//! - [`git`]: Repository access (clone, refs, diff, listing)
//! - [`keys`]: Key binding definitions
//! - [`model`]: Domain models
//! - [`pipeline`]: Validate, compare and archive on an acquired working copy
//! - [`ui`]: Output formatting and the selection dialog
//! - [`workspace`]: Temporary directory owned by a run

pub mod app;
pub mod archive;
pub mod cli;
pub mod config;
pub mod git;
pub mod keys;
pub mod model;
pub mod pipeline;
pub mod ui;
pub mod workspace;

mod text;
