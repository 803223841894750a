mod git_tools;
pub use git_tools::*;
