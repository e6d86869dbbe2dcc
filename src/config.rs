//! Run configuration
//!
//! Built from the command line; nothing is read from or written to disk.

use std::ffi::OsStr;
use std::path::PathBuf;

use log::LevelFilter;

use crate::git::constants::DEFAULT_COMMIT_LIMIT;

/// Everything one run needs to know
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Source repository URL or local path
    pub repo_url: String,

    /// Archive path; a name is generated in the current directory when absent
    pub output: Option<PathBuf>,

    /// Older endpoint; chosen interactively when absent
    pub start: Option<String>,

    /// Newer endpoint; chosen interactively when absent
    pub end: Option<String>,

    /// HTTPS token
    pub auth_token: Option<String>,

    /// Keep the working copy after the run
    pub keep_workspace: bool,

    /// Commits offered for selection (0 = all)
    pub commit_limit: usize,

    /// Emit ANSI colors
    pub color: bool,

    /// Redraw clone progress in place
    pub progress: bool,

    /// Number of `-v` flags
    pub verbosity: u8,
}

impl Config {
    /// Non-interactive defaults for `repo_url`
    pub fn new(repo_url: impl Into<String>) -> Self {
        Self {
            repo_url: repo_url.into(),
            output: None,
            start: None,
            end: None,
            auth_token: None,
            keep_workspace: false,
            commit_limit: DEFAULT_COMMIT_LIMIT,
            color: false,
            progress: false,
            verbosity: 0,
        }
    }

    /// Log level for the verbosity: warn, then info, debug and trace
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Whether colors should be used
///
/// `NO_COLOR` with any non-empty value disables color, like the flag does.
pub fn color_enabled(no_color_flag: bool, no_color_env: Option<&OsStr>, is_terminal: bool) -> bool {
    let env_disabled = no_color_env.is_some_and(|value| !value.is_empty());
    !no_color_flag && !env_disabled && is_terminal
}
