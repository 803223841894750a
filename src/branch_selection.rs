use log::*;

use crate::{GitPathError, GitTools};

const BRANCH_PREFIX: &str = "refs/heads/";

/// How to choose the branch name in the URL.
/// Explicit choices take precedence over `HEAD`, in the order of
/// `main`, `master`, then `branch`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BranchSelection {
    pub main: bool,
    pub master: bool,
    pub branch: Option<String>,
}

impl BranchSelection {
    /// The explicitly selected branch name, if any.
    /// ```
    /// use gitpath::BranchSelection;
    /// let selection = BranchSelection {
    ///     master: true,
    ///     branch: Some("dev".to_string()),
    ///     ..Default::default()
    /// };
    /// assert_eq!(selection.explicit(), Some("master"));
    /// assert_eq!(BranchSelection::default().explicit(), None);
    /// ```
    pub fn explicit(&self) -> Option<&str> {
        if self.main {
            return Some("main");
        }
        if self.master {
            return Some("master");
        }
        self.branch.as_deref()
    }

    /// Resolve the branch name, reading `HEAD` from `git` unless a branch
    /// is selected explicitly.
    pub fn resolve(&self, git: &GitTools) -> anyhow::Result<String> {
        if let Some(name) = self.explicit() {
            debug!("resolve: explicit branch {name}");
            return Ok(name.to_string());
        }
        let name = Self::head_branch_name(git)?;
        debug!("resolve: HEAD branch {name}");
        Ok(name)
    }

    /// Get the short name of the branch `HEAD` is on, such as `main` or
    /// `feature/foo`. Fails if `HEAD` isn't on a branch.
    pub fn head_branch_name(git: &GitTools) -> anyhow::Result<String> {
        let target = git.head_target()?;
        trace!("head_branch_name: HEAD -> {target:?}");
        if let Some(name) = target
            .as_deref()
            .and_then(|name| name.strip_prefix(BRANCH_PREFIX))
        {
            return Ok(name.to_string());
        }
        let head = target
            .or_else(|| git.head_commit_id().map(|id| id.to_string()))
            .unwrap_or_default();
        Err(GitPathError::DetachedHead(head).into())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::extensions::tests::TempRepository;

    use super::*;

    #[test]
    fn explicit_precedence() {
        let all = BranchSelection {
            main: true,
            master: true,
            branch: Some("dev".to_string()),
        };
        assert_eq!(all.explicit(), Some("main"));
        let branch = BranchSelection {
            branch: Some("feature/x".to_string()),
            ..Default::default()
        };
        assert_eq!(branch.explicit(), Some("feature/x"));
    }

    #[test]
    fn resolve_explicit_ignores_head() -> anyhow::Result<()> {
        let repo = TempRepository::new()?;
        repo.add_file_content(Path::new("README.md"), "# readme")?;
        let commit_id = repo.commit("Add README")?;
        repo.repository().set_head_detached(commit_id)?;
        let selection = BranchSelection {
            master: true,
            ..Default::default()
        };
        assert_eq!(selection.resolve(&repo.git()?)?, "master");
        Ok(())
    }

    #[test]
    fn resolve_head() -> anyhow::Result<()> {
        let repo = TempRepository::new()?;
        repo.repository().set_head("refs/heads/feature/foo")?;
        repo.add_file_content(Path::new("README.md"), "# readme")?;
        repo.commit("Add README")?;
        let selection = BranchSelection::default();
        assert_eq!(selection.resolve(&repo.git()?)?, "feature/foo");
        Ok(())
    }

    #[test]
    fn resolve_head_unborn() -> anyhow::Result<()> {
        let repo = TempRepository::new()?;
        repo.repository().set_head("refs/heads/trunk")?;
        assert_eq!(BranchSelection::default().resolve(&repo.git()?)?, "trunk");
        Ok(())
    }

    #[test]
    fn resolve_head_detached() -> anyhow::Result<()> {
        let repo = TempRepository::new()?;
        repo.add_file_content(Path::new("README.md"), "# readme")?;
        let commit_id = repo.commit("Add README")?;
        repo.repository().set_head_detached(commit_id)?;
        let error = BranchSelection::default()
            .resolve(&repo.git()?)
            .err()
            .unwrap();
        match error.downcast_ref::<GitPathError>() {
            Some(GitPathError::DetachedHead(head)) => assert_eq!(*head, commit_id.to_string()),
            _ => panic!("unexpected error: {error:?}"),
        }
        Ok(())
    }
}
