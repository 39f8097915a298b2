//! Origin remote detection and GitHub Pages identifier derivation.

use std::path::Path;

use git2::Repository;

use crate::error::AppError;

/// Hosting identifiers derived from the repository's `origin` remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoOrigin {
    /// The `origin` remote URL as recorded in the repository.
    pub remote_url: String,
    /// Second-to-last `/`-separated segment of the URL.
    pub host_user: String,
    /// Last segment with any trailing dotted extension removed.
    pub host_repo: String,
}

impl RepoOrigin {
    /// Split a remote URL into hosting identifiers.
    ///
    /// Relies on the GitHub convention that the final two path segments are
    /// `<user>/<repo>`; no plausibility check is made on either value.
    pub fn from_url(remote_url: &str) -> Result<Self, AppError> {
        let segments: Vec<&str> = remote_url.split('/').collect();
        if segments.len() < 2 {
            return Err(AppError::MalformedRemoteUrl(remote_url.to_string()));
        }

        let host_user = segments[segments.len() - 2].to_string();
        let last = segments[segments.len() - 1];
        let host_repo = last.split('.').next().unwrap_or(last).to_string();

        Ok(Self { remote_url: remote_url.to_string(), host_user, host_repo })
    }

    /// The derived GitHub Pages URL for published documentation.
    pub fn pages_url(&self) -> String {
        format!("https://{}.github.io/{}", self.host_user, self.host_repo)
    }
}

/// Resolve the `origin` remote of the repository rooted at `root`.
///
/// Fails before any filesystem write: a missing `.git` entry is
/// `NotARepository`, a missing or URL-less `origin` remote is
/// `MissingOriginRemote`.
pub fn resolve(root: &Path) -> Result<RepoOrigin, AppError> {
    if !root.join(".git").exists() {
        return Err(AppError::NotARepository);
    }

    let repo = Repository::open(root).map_err(|_| AppError::NotARepository)?;
    let remote = repo.find_remote("origin").map_err(|_| AppError::MissingOriginRemote)?;
    let url = remote.url().ok_or(AppError::MissingOriginRemote)?;

    RepoOrigin::from_url(url)
}
