//! Application module
//!
//! Drives one run from URL to archive, split into:
//! - `run`: App struct, acquisition and the overall flow
//! - `select`: choosing the endpoints when they are not given
//! - `report`: printing pipeline stages and the final result

mod report;
mod run;
mod select;

pub use run::App;

use std::io;

use thiserror::Error;

use crate::git::GitError;
use crate::model::UrlError;
use crate::pipeline::CompareError;

/// Errors that end a run
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Url(#[from] UrlError),

    #[error("failed to create workspace: {0}")]
    Workspace(#[source] io::Error),

    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Compare(#[from] CompareError),

    #[error("selection failed: {0}")]
    Selection(#[source] io::Error),

    #[error("selection cancelled")]
    SelectionCancelled,

    #[error("no branches found in repository")]
    NoBranches,

    #[error("no commits found on {0}")]
    NoCommits(String),

    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}
