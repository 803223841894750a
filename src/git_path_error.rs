use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum GitPathError {
    #[error("No git repository found from {path:?}")]
    RepositoryNotFound {
        path: PathBuf,
        #[source]
        source: Option<git2::Error>,
    },
    #[error("Received {0} instead of 1 arguments")]
    InvalidArgumentCount(usize),
    #[error("Expected one URL for the remote \"{remote}\", found {urls:?}")]
    AmbiguousOrMissingRemote { remote: String, urls: Vec<String> },
    #[error("gitpath requires HEAD on a branch, HEAD is {0}")]
    DetachedHead(String),
    #[error("Not a GitHub or GitLab repository: {0}")]
    UnsupportedProvider(String),
    #[error("{path:?} is outside of the repository {root:?}")]
    PathOutsideRepository { path: PathBuf, root: PathBuf },
}

impl GitPathError {
    /// The process exit code for this error.
    /// Usage errors use 2, the same as `clap`.
    pub fn exit_code(&self) -> u8 {
        match self {
            GitPathError::InvalidArgumentCount(_) => 2,
            _ => 1,
        }
    }

    /// An additional line to show to the user, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            GitPathError::RepositoryNotFound { .. } => Some("Are you in a git repository?"),
            GitPathError::UnsupportedProvider(_) => {
                Some("Only github and gitlab hosts are supported. Rerun with --verbose for details.")
            }
            _ => None,
        }
    }
}
