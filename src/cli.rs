//! Command-line interface

use std::env;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::{Config, color_enabled};
use crate::git::constants::DEFAULT_COMMIT_LIMIT;

#[derive(Parser, Debug)]
#[command(name = "gitcompare", version)]
#[command(about = "Package the files changed between two commits into a ZIP archive", long_about = None)]
pub struct Cli {
    /// Repository URL (HTTPS, SSH, file:// or local path)
    #[arg(short, long, value_name = "URL")]
    pub repo: String,

    /// Archive path (default: <repo>_<start>_to_<end>_<timestamp>.zip)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Older endpoint: branch, tag or commit hash
    #[arg(short, long, value_name = "REF")]
    pub start: Option<String>,

    /// Newer endpoint: branch, tag or commit hash
    #[arg(short, long, value_name = "REF")]
    pub end: Option<String>,

    /// Token for HTTPS repositories
    #[arg(long, value_name = "TOKEN", env = "GITCOMPARE_AUTH_TOKEN", hide_env_values = true)]
    pub auth_token: Option<String>,

    /// Keep the cloned working copy
    #[arg(long)]
    pub no_cleanup: bool,

    /// Commits offered for selection (0 = all)
    #[arg(long, value_name = "N", default_value_t = DEFAULT_COMMIT_LIMIT)]
    pub commit_limit: usize,

    /// Disable colored output (also honours NO_COLOR)
    #[arg(long)]
    pub no_color: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Resolve flags against the environment
    pub fn into_config(self) -> Config {
        let stdout_is_terminal = io::stdout().is_terminal();
        let no_color_env = env::var_os("NO_COLOR");

        Config {
            repo_url: self.repo,
            output: self.output,
            start: self.start,
            end: self.end,
            auth_token: self.auth_token.filter(|token| !token.is_empty()),
            keep_workspace: self.no_cleanup,
            commit_limit: self.commit_limit,
            color: color_enabled(self.no_color, no_color_env.as_deref(), stdout_is_terminal),
            progress: stdout_is_terminal,
            verbosity: self.verbose,
        }
    }
}
