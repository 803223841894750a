use log::*;

use crate::{GitPathError, GitTools};

/// The remote used as the canonical upstream.
pub const ORIGIN: &str = "origin";

/// Convert a remote URL to the `https://host/owner/repo` form that browsers
/// can open.
/// ```
/// use gitpath::normalize_remote_url;
/// assert_eq!(
///     normalize_remote_url("git@gitlab.com:owner/repo.git"),
///     "https://gitlab.com/owner/repo"
/// );
/// assert_eq!(
///     normalize_remote_url("https://github.com/owner/repo.git"),
///     "https://github.com/owner/repo"
/// );
/// ```
pub fn normalize_remote_url(url: &str) -> String {
    let mut url = url.to_string();
    if url.contains('@') {
        // SSH form: `git@host:owner/repo`.
        if let Some(rest) = url.strip_prefix("git@") {
            url = rest.to_string();
        }
        url = url.replacen(':', "/", 1);
    }
    if url.ends_with(".git") {
        url.truncate(url.len() - ".git".len());
    }
    if !url.starts_with("https://") {
        url.insert_str(0, "https://");
    }
    url
}

/// Get the base URL of the repository from the `origin` remote.
/// The remote must have exactly one URL.
pub fn base_url(git: &GitTools) -> anyhow::Result<String> {
    let urls = git.remote_urls(ORIGIN)?;
    if urls.len() != 1 {
        return Err(GitPathError::AmbiguousOrMissingRemote {
            remote: ORIGIN.to_string(),
            urls,
        }
        .into());
    }
    let url = &urls[0];
    let base_url = normalize_remote_url(url);
    debug!("base_url: {url} -> {base_url}");
    Ok(base_url)
}
