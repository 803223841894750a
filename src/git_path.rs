use std::path::{Path, PathBuf};

use log::*;

use crate::*;

/// Computes the web URL of files in one repository.
/// # Examples
/// ```no_run
/// use gitpath::{BranchSelection, GitPath};
///
/// # use std::path::Path;
/// fn main() -> anyhow::Result<()> {
///   let git_path = GitPath::new(Path::new("path/to/repo"))?;
///   let url = git_path.url(Path::new("README.md"), &BranchSelection::default())?;
///   println!("{url}");
///   Ok(())
/// }
/// ```
pub struct GitPath {
    git: GitTools,
    base_dir: PathBuf,
}

impl GitPath {
    /// Open the repository enclosing `base_dir`.
    /// Relative file paths given to `url()` are resolved against `base_dir`.
    pub fn new(base_dir: &Path) -> anyhow::Result<Self> {
        Ok(Self {
            git: GitTools::discover(base_dir)?,
            base_dir: base_dir.to_path_buf(),
        })
    }

    /// Get the URL to view `path` on the branch chosen by `selection`.
    pub fn url(&self, path: &Path, selection: &BranchSelection) -> anyhow::Result<String> {
        let branch = selection.resolve(&self.git)?;
        trace!("url: branch={branch}");
        let base_url = base_url(&self.git)?;
        trace!("url: base_url={base_url}");
        let relative_path = self.git.path_in_workdir(path, &self.base_dir)?;
        trace!("url: relative_path={relative_path}");
        blob_url(&base_url, &branch, &relative_path)
    }
}
