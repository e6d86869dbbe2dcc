//! Repository URL parsing

use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// `https://[user@]host/owner/name`
static HTTPS_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(?:[^@/]+@)?([^/]+)/([^/]+)/([^/]+)").expect("valid regex")
});

/// `ssh://[user@]host[:port]/owner/name`
static SSH_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ssh://(?:[^@/]+@)?([^/:]+)(?::\d+)?/([^/]+)/([^/]+)").expect("valid regex")
});

/// `[user@]host:owner/name` (scp-like syntax)
static SCP_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[^@/]+@)?([^:/]+):([^/]+)/([^/]+)").expect("valid regex")
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlError {
    #[error("unable to parse repository URL: {0}")]
    Unparsable(String),
}

/// Transport implied by a repository URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Https,
    Ssh,
    Local,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Protocol::Https => "https",
            Protocol::Ssh => "ssh",
            Protocol::Local => "local",
        };
        f.write_str(name)
    }
}

/// Parsed repository information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoInfo {
    /// URL as given by the user
    pub url: String,
    pub owner: String,
    /// Repository name without a `.git` suffix
    pub name: String,
    pub protocol: Protocol,
}

impl RepoInfo {
    pub fn parse(url: &str) -> Result<Self, UrlError> {
        let trimmed = url.trim_end_matches('/');
        let trimmed = trimmed.strip_suffix(".git").unwrap_or(trimmed);

        if is_ssh_url(trimmed) {
            let captures = SSH_URL
                .captures(trimmed)
                .or_else(|| SCP_URL.captures(trimmed.trim_start_matches("ssh://")));
            if let Some(c) = captures {
                return Ok(Self::new(url, &c[2], &c[3], Protocol::Ssh));
            }
        } else if let Some(c) = HTTPS_URL.captures(trimmed) {
            return Ok(Self::new(url, &c[2], &c[3], Protocol::Https));
        } else if let Some(info) = Self::parse_local(url) {
            return Ok(info);
        }

        Err(UrlError::Unparsable(url.to_string()))
    }

    /// `file://` URLs and paths that exist on disk
    ///
    /// Existing paths are canonicalized first so `.` and `..` name the
    /// directory they point at.
    fn parse_local(url: &str) -> Option<Self> {
        let given = match url.strip_prefix("file://") {
            Some(rest) => Path::new(rest),
            None if Path::new(url).exists() => Path::new(url),
            None => return None,
        };
        let path = given.canonicalize().unwrap_or_else(|_| given.to_path_buf());

        let name = path.file_name()?.to_string_lossy();
        let name = name.strip_suffix(".git").unwrap_or(&name);
        let owner = path
            .parent()
            .and_then(Path::file_name)
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();
        Some(Self::new(url, &owner, name, Protocol::Local))
    }

    fn new(url: &str, owner: &str, name: &str, protocol: Protocol) -> Self {
        Self {
            url: url.to_string(),
            owner: owner.to_string(),
            name: name.to_string(),
            protocol,
        }
    }

    /// `owner/name`, or just the name when there is no owner
    pub fn project(&self) -> String {
        if self.owner.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.owner, self.name)
        }
    }
}

/// Check if the URL uses SSH transport
pub fn is_ssh_url(url: &str) -> bool {
    url.starts_with("git@") || url.starts_with("ssh://")
}
