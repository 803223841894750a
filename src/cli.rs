use std::{
    io::Write,
    path::{Path, PathBuf},
};

use clap::Parser;
use log::*;

use crate::*;

/// The `gitpath` command line interface.
/// # Examples
/// ```no_run
/// use gitpath::Cli;
///
/// fn main() -> anyhow::Result<()> {
///   let cli = Cli::new_from_args();
///   cli.run(&mut std::io::stdout())
/// }
/// ```
#[derive(Debug, Default, Parser)]
#[command(
    name = "gitpath",
    version,
    about = "Returns the URL to a particular git path",
    long_about = None
)]
pub struct Cli {
    /// The file to get the URL of.
    #[arg(value_name = "FILEPATH")]
    pub paths: Vec<PathBuf>,

    /// Enables verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Use the `main` branch instead of the current branch.
    #[arg(long)]
    pub main: bool,

    /// Use the `master` branch instead of the current branch.
    #[arg(long)]
    pub master: bool,

    /// Use the branch NAME instead of the current branch.
    #[arg(long, value_name = "NAME")]
    pub branch: Option<String>,
}

impl Cli {
    pub fn new_from_args() -> Self {
        Self::parse()
    }

    /// The log level the `--verbose` flag selects.
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Trace
        } else {
            LevelFilter::Warn
        }
    }

    pub fn branch_selection(&self) -> BranchSelection {
        BranchSelection {
            main: self.main,
            master: self.master,
            branch: self.branch.clone(),
        }
    }

    /// Get the one file path argument.
    pub fn path(&self) -> anyhow::Result<&Path> {
        match self.paths.as_slice() {
            [path] => Ok(path),
            paths => Err(GitPathError::InvalidArgumentCount(paths.len()).into()),
        }
    }

    /// Run in the current directory, and write the URL to `out`.
    pub fn run(&self, out: &mut impl Write) -> anyhow::Result<()> {
        let current_dir = std::env::current_dir()?;
        self.run_in(&current_dir, out)
    }

    /// Run as if `base_dir` is the current directory.
    pub fn run_in(&self, base_dir: &Path, out: &mut impl Write) -> anyhow::Result<()> {
        let path = self.path()?;
        debug!("run_in: {path:?} in {base_dir:?}");
        let git_path = GitPath::new(base_dir)?;
        let url = git_path.url(path, &self.branch_selection())?;
        writeln!(out, "{url}")?;
        Ok(())
    }
}
