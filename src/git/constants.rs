//! Git-specific constants
//!
//! Centralized definitions for remote names, ref namespaces, and limits.

/// Name of the remote created by the clone
pub const ORIGIN: &str = "origin";

/// Default number of commits offered for selection
pub const DEFAULT_COMMIT_LIMIT: usize = 100;

/// Ref namespace prefixes
pub mod refs {
    /// Local branches
    pub const HEADS: &str = "refs/heads/";
    /// Remote-tracking branches of origin
    pub const REMOTES_ORIGIN: &str = "refs/remotes/origin/";
    /// Remote branch shorthand
    pub const ORIGIN_SHORTHAND: &str = "origin/";
    /// Tags
    pub const TAGS: &str = "refs/tags/";
    /// Symbolic branch name to skip in remote listings
    pub const HEAD: &str = "HEAD";
}

/// Refspec used by the secondary fetch of every remote branch
pub const ALL_BRANCHES_REFSPEC: &str = "+refs/heads/*:refs/remotes/origin/*";

/// Credential settings
pub mod auth {
    /// Username paired with HTTPS tokens (must be non-empty for GitHub)
    pub const TOKEN_USERNAME: &str = "token";
    /// Default SSH user when the URL carries none
    pub const SSH_USERNAME: &str = "git";
    /// Private keys tried in order, relative to `~/.ssh`
    pub const SSH_KEYS: &[&str] = &["id_ed25519", "id_rsa"];
    /// Credential callback invocations before giving up
    /// (username, agent, and each key may take one)
    pub const MAX_ATTEMPTS: usize = 5;
}

/// Display truncation limits
pub mod limits {
    /// Branch tip summary
    pub const BRANCH_SUMMARY: usize = 60;
    /// Commit message in commit listings
    pub const COMMIT_MESSAGE: usize = 80;
}
