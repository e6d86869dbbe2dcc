//! Repository acquisition
//!
//! Clones the source repository with full history and every branch, and
//! refreshes remote-tracking branches afterwards on a best-effort basis.

use std::path::{Path, PathBuf};

use git2::build::RepoBuilder;
use git2::{Cred, CredentialType, FetchOptions, Progress, RemoteCallbacks, Repository};
use log::{debug, info, warn};

use super::GitError;
use super::constants::{ALL_BRANCHES_REFSPEC, ORIGIN, auth};
use crate::model::is_ssh_url;

/// What to clone and how to authenticate
#[derive(Debug, Clone)]
pub struct CloneOptions {
    pub url: String,
    /// HTTPS token, ignored for SSH URLs
    pub auth_token: Option<String>,
}

impl CloneOptions {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            auth_token: None,
        }
    }

    pub fn with_auth_token(mut self, token: Option<String>) -> Self {
        self.auth_token = token.filter(|t| !t.is_empty());
        self
    }

    /// Pick the authentication method for the URL
    pub fn auth(&self) -> Result<Auth, GitError> {
        if is_ssh_url(&self.url) {
            return Auth::ssh();
        }
        Ok(match &self.auth_token {
            Some(token) => Auth::Token(token.clone()),
            None => Auth::None,
        })
    }
}

/// Authentication method offered to the remote
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Auth {
    /// Public repositories and local paths
    None,
    /// HTTPS basic auth with a token as password
    Token(String),
    /// SSH agent (when running) followed by private key files
    Ssh { agent: bool, keys: Vec<PathBuf> },
}

impl Auth {
    fn ssh() -> Result<Self, GitError> {
        let agent = std::env::var_os("SSH_AUTH_SOCK").is_some();
        let keys: Vec<PathBuf> = home_dir()
            .map(|home| {
                auth::SSH_KEYS
                    .iter()
                    .map(|key| home.join(".ssh").join(key))
                    .filter(|path| path.is_file())
                    .collect()
            })
            .unwrap_or_default();

        if !agent && keys.is_empty() {
            return Err(GitError::Credentials(
                "no SSH agent running and no key found in ~/.ssh".to_string(),
            ));
        }
        Ok(Auth::Ssh { agent, keys })
    }
}

/// Snapshot of clone/fetch transfer statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransferProgress {
    pub received_objects: usize,
    pub indexed_objects: usize,
    pub total_objects: usize,
    pub indexed_deltas: usize,
    pub total_deltas: usize,
    pub received_bytes: usize,
}

impl TransferProgress {
    /// Overall completion in percent (objects received and indexed, deltas resolved)
    pub fn percent(&self) -> usize {
        let total = self.total_objects * 2 + self.total_deltas;
        if total == 0 {
            return 0;
        }
        let done = self.received_objects + self.indexed_objects + self.indexed_deltas;
        (done * 100 / total).min(100)
    }
}

impl From<&Progress<'_>> for TransferProgress {
    fn from(stats: &Progress<'_>) -> Self {
        Self {
            received_objects: stats.received_objects(),
            indexed_objects: stats.indexed_objects(),
            total_objects: stats.total_objects(),
            indexed_deltas: stats.indexed_deltas(),
            total_deltas: stats.total_deltas(),
            received_bytes: stats.received_bytes(),
        }
    }
}

/// Result of the secondary fetch after cloning
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// All remote branches were fetched
    Fetched,
    /// The fetch failed; the refs from the clone are used as they are
    Skipped(String),
}

/// Clone `options.url` into `destination`, reporting transfer progress
pub fn acquire(
    options: &CloneOptions,
    destination: &Path,
    mut progress: impl FnMut(&TransferProgress),
) -> Result<Repository, GitError> {
    let auth = options.auth()?;

    let mut callbacks = credential_callbacks(&auth);
    callbacks.transfer_progress(|stats| {
        progress(&TransferProgress::from(&stats));
        true
    });
    let mut fetch = FetchOptions::new();
    fetch.remote_callbacks(callbacks);

    info!("cloning {} into {}", options.url, destination.display());
    RepoBuilder::new()
        .fetch_options(fetch)
        .clone(&options.url, destination)
        .map_err(|source| GitError::Acquisition {
            url: options.url.clone(),
            source,
        })
}

/// Fetch every branch of origin into `refs/remotes/origin/*`
///
/// Failure is not fatal: the branches brought in by the clone may already
/// suffice, so the reason is returned instead of an error.
pub fn refresh_remote_branches(repo: &Repository, options: &CloneOptions) -> FetchOutcome {
    let result = options
        .auth()
        .map_err(|err| err.to_string())
        .and_then(|auth| fetch_all_branches(repo, &auth).map_err(|err| err.message().to_string()));

    match result {
        Ok(()) => {
            debug!("fetched all branches of {}", ORIGIN);
            FetchOutcome::Fetched
        }
        Err(reason) => {
            warn!("secondary fetch skipped: {}", reason);
            FetchOutcome::Skipped(reason)
        }
    }
}

fn fetch_all_branches(repo: &Repository, auth: &Auth) -> Result<(), git2::Error> {
    let mut remote = repo.find_remote(ORIGIN)?;
    let mut fetch = FetchOptions::new();
    fetch.remote_callbacks(credential_callbacks(auth));
    remote.fetch(&[ALL_BRANCHES_REFSPEC], Some(&mut fetch), None)
}

fn credential_callbacks(auth: &Auth) -> RemoteCallbacks<'_> {
    let mut state = CredentialState {
        auth,
        attempts: 0,
        ssh_method: 0,
    };
    let mut callbacks = RemoteCallbacks::new();
    callbacks.credentials(move |_url, username, allowed| state.next(username, allowed));
    callbacks
}

/// Tracks credential callback invocations; libgit2 calls again after each rejection
struct CredentialState<'a> {
    auth: &'a Auth,
    attempts: usize,
    ssh_method: usize,
}

impl CredentialState<'_> {
    fn next(&mut self, username: Option<&str>, allowed: CredentialType) -> Result<Cred, git2::Error> {
        self.attempts += 1;
        if self.attempts > auth::MAX_ATTEMPTS {
            return Err(git2::Error::from_str("authentication failed"));
        }
        let user = username.unwrap_or(auth::SSH_USERNAME);
        let configured = self.auth;

        match configured {
            Auth::Token(token) if allowed.contains(CredentialType::USER_PASS_PLAINTEXT) => {
                Cred::userpass_plaintext(auth::TOKEN_USERNAME, token)
            }
            Auth::Ssh { agent, keys } if allowed.contains(CredentialType::SSH_KEY) => {
                let method = self.ssh_method;
                self.ssh_method += 1;
                let key_index = if *agent {
                    if method == 0 {
                        debug!("offering SSH agent identity for {}", user);
                        return Cred::ssh_key_from_agent(user);
                    }
                    method - 1
                } else {
                    method
                };
                match keys.get(key_index) {
                    Some(key) => {
                        debug!("offering SSH key {}", key.display());
                        Cred::ssh_key(user, None, key, None)
                    }
                    None => Err(git2::Error::from_str("no more SSH keys to try")),
                }
            }
            _ if allowed.contains(CredentialType::USERNAME) => Cred::username(user),
            _ if allowed.contains(CredentialType::DEFAULT) => Cred::default(),
            _ => Err(git2::Error::from_str("repository requires credentials")),
        }
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_https_with_token() {
        let options = CloneOptions::new("https://github.com/o/r.git")
            .with_auth_token(Some("secret".to_string()));
        assert_eq!(options.auth().unwrap(), Auth::Token("secret".to_string()));
    }

    #[test]
    fn test_https_without_token() {
        let options = CloneOptions::new("https://github.com/o/r.git");
        assert_eq!(options.auth().unwrap(), Auth::None);
    }

    #[test]
    fn test_empty_token_is_ignored() {
        let options = CloneOptions::new("https://github.com/o/r").with_auth_token(Some(String::new()));
        assert_eq!(options.auth_token, None);
        assert_eq!(options.auth().unwrap(), Auth::None);
    }

    #[test]
    fn test_progress_percent() {
        let empty = TransferProgress::default();
        assert_eq!(empty.percent(), 0);

        let halfway = TransferProgress {
            received_objects: 10,
            indexed_objects: 0,
            total_objects: 10,
            indexed_deltas: 0,
            total_deltas: 0,
            received_bytes: 1024,
        };
        assert_eq!(halfway.percent(), 50);

        let done = TransferProgress {
            received_objects: 10,
            indexed_objects: 10,
            total_objects: 10,
            indexed_deltas: 4,
            total_deltas: 4,
            received_bytes: 2048,
        };
        assert_eq!(done.percent(), 100);
    }

    #[test]
    fn test_credentials_give_up_after_max_attempts() {
        let token = Auth::Token("secret".to_string());
        let mut state = CredentialState {
            auth: &token,
            attempts: 0,
            ssh_method: 0,
        };
        for _ in 0..auth::MAX_ATTEMPTS {
            assert!(state.next(None, CredentialType::USER_PASS_PLAINTEXT).is_ok());
        }
        assert!(state.next(None, CredentialType::USER_PASS_PLAINTEXT).is_err());
    }

    #[test]
    fn test_ssh_keys_exhausted() {
        let ssh = Auth::Ssh {
            agent: false,
            keys: vec![],
        };
        let mut state = CredentialState {
            auth: &ssh,
            attempts: 0,
            ssh_method: 0,
        };
        assert!(state.next(Some("git"), CredentialType::SSH_KEY).is_err());
    }
}
