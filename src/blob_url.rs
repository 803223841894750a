use log::*;

use crate::GitPathError;

/// The hosting services that `gitpath` can create URLs for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    GitHub,
    GitLab,
}

impl Provider {
    /// Detect the provider from the host name in `base_url`.
    /// `github` is checked before `gitlab`.
    pub fn from_base_url(base_url: &str) -> Option<Self> {
        if base_url.contains("github") {
            Some(Provider::GitHub)
        } else if base_url.contains("gitlab") {
            Some(Provider::GitLab)
        } else {
            None
        }
    }

    /// The path segment between the repository and the branch name.
    fn blob_segment(&self) -> &'static str {
        match self {
            Provider::GitHub => "blob",
            Provider::GitLab => "-/blob",
        }
    }

    pub fn blob_url(&self, base_url: &str, branch: &str, path: &str) -> String {
        format!("{base_url}/{}/{branch}/{path}", self.blob_segment())
    }
}

/// Create the URL to view `path` at `branch` of the repository at `base_url`.
/// The `branch` and `path` are not percent-encoded.
/// ```
/// use gitpath::blob_url;
/// # fn main() -> anyhow::Result<()> {
/// assert_eq!(
///     blob_url("https://github.com/owner/repo", "main", "src/lib.rs")?,
///     "https://github.com/owner/repo/blob/main/src/lib.rs"
/// );
/// assert!(blob_url("https://example.com/owner/repo", "main", "README.md").is_err());
/// # Ok(())
/// # }
/// ```
pub fn blob_url(base_url: &str, branch: &str, path: &str) -> anyhow::Result<String> {
    let provider = Provider::from_base_url(base_url)
        .ok_or_else(|| GitPathError::UnsupportedProvider(base_url.to_string()))?;
    let url = provider.blob_url(base_url, branch, path);
    debug!("blob_url: {provider:?} {url}");
    Ok(url)
}
