use std::path::Path;

use log::*;

use crate::GitPathError;

/// Get the path of `full_path` relative to `root_path`, with `/` separators
/// and without a leading separator.
///
/// Both paths should already be real paths; `..` segments are not
/// normalized. A `full_path` outside of `root_path` is an error.
/// ```
/// use std::path::Path;
/// # fn main() -> anyhow::Result<()> {
/// let root = Path::new("/home/user/gitpath");
/// assert_eq!(gitpath::relative_path(&root.join("README.md"), root)?, "README.md");
/// assert!(gitpath::relative_path(Path::new("/etc/hosts"), root).is_err());
/// # Ok(())
/// # }
/// ```
pub fn relative_path(full_path: &Path, root_path: &Path) -> anyhow::Result<String> {
    let relative = full_path.strip_prefix(root_path).map_err(|_| {
        GitPathError::PathOutsideRepository {
            path: full_path.to_path_buf(),
            root: root_path.to_path_buf(),
        }
    })?;
    let relative = to_posix_path(relative);
    trace!("relative_path: {full_path:?} in {root_path:?} -> {relative}");
    Ok(relative)
}

#[cfg(target_os = "windows")]
fn to_posix_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(not(target_os = "windows"))]
fn to_posix_path(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
