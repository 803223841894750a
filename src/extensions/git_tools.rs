use std::path::{Path, PathBuf};

use anyhow::Context;
use log::*;

use crate::GitPathError;

pub struct GitTools {
    repository: git2::Repository,
    workdir_path: PathBuf,
}

impl GitTools {
    /// Construct from a directory inside the working directory of a
    /// repository. The enclosing repository is located by
    /// `find_workdir_path()`, and then opened.
    pub fn discover(path: &Path) -> anyhow::Result<Self> {
        let workdir_path = Self::find_workdir_path(path)?;
        let repository = git2::Repository::open(&workdir_path).map_err(|error| {
            GitPathError::RepositoryNotFound {
                path: workdir_path.clone(),
                source: Some(error),
            }
        })?;
        debug!("discover: {path:?} -> {workdir_path:?}");
        Ok(Self {
            repository,
            workdir_path,
        })
    }

    /// Find the nearest ancestor of `path`, including `path` itself, that
    /// contains a `.git` entry. The entry can be a directory or a file, so
    /// that worktrees and submodules are found too.
    /// The returned path is canonicalized.
    pub fn find_workdir_path(path: &Path) -> anyhow::Result<PathBuf> {
        let mut current = path
            .canonicalize()
            .with_context(|| format!("Failed to resolve {path:?}"))?;
        loop {
            trace!("find_workdir_path: checking {current:?}");
            if current.join(".git").exists() {
                trace!("find_workdir_path: found {current:?}");
                return Ok(current);
            }
            // `parent()` is `None` once the root of the file system is reached.
            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(GitPathError::RepositoryNotFound {
                        path: path.to_path_buf(),
                        source: None,
                    }
                    .into());
                }
            }
        }
    }

    /// Get `git2::Repository`.
    pub fn repository(&self) -> &git2::Repository {
        &self.repository
    }

    /// Get the canonicalized root directory of the worktree.
    pub fn workdir_path(&self) -> &Path {
        &self.workdir_path
    }

    /// Get the path of `path` relative to the root of the worktree, in the
    /// `/`-separated form used in URLs. A relative `path` is resolved against
    /// `base_dir`.
    pub fn path_in_workdir(&self, path: &Path, base_dir: &Path) -> anyhow::Result<String> {
        let path = base_dir.join(path);
        let path = path
            .canonicalize()
            .with_context(|| format!("Failed to resolve {path:?}"))?;
        crate::relative_path(&path, self.workdir_path())
    }

    /// Get all URLs configured for the remote `name`.
    /// A remote normally has one, but the config allows any number.
    pub fn remote_urls(&self, name: &str) -> anyhow::Result<Vec<String>> {
        let key = format!("remote.{name}.url");
        let config = self.repository.config()?;
        let mut urls: Vec<String> = Vec::new();
        let mut entries = match config.multivar(&key, None) {
            Ok(entries) => entries,
            Err(error) if error.code() == git2::ErrorCode::NotFound => return Ok(urls),
            Err(error) => return Err(error.into()),
        };
        while let Some(entry) = entries.next() {
            let entry = entry?;
            // `value()` is `None` for non-UTF-8 values; keep them so they are counted.
            urls.push(String::from_utf8_lossy(entry.value_bytes()).into_owned());
        }
        trace!("remote_urls: {key}={urls:?}");
        Ok(urls)
    }

    /// Get the name of the reference `HEAD` points to, such as
    /// `refs/heads/main`, or `None` if `HEAD` is detached.
    /// Works on a branch without any commits too, because `HEAD` is not
    /// peeled.
    pub fn head_target(&self) -> anyhow::Result<Option<String>> {
        let head = self.repository.find_reference("HEAD")?;
        Ok(head.symbolic_target().map(str::to_string))
    }

    /// Get the commit `HEAD` points to when it is detached, for messages.
    pub fn head_commit_id(&self) -> Option<git2::Oid> {
        self.repository
            .find_reference("HEAD")
            .ok()
            .and_then(|head| head.target())
    }
}
