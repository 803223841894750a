mod blob_url;
pub use blob_url::*;

mod branch_selection;
pub use branch_selection::*;

mod cli;
pub use cli::*;

mod extensions;
pub use extensions::*;

mod git_path;
pub use git_path::*;

mod git_path_error;
pub use git_path_error::*;

mod relative_path;
pub use relative_path::*;

mod remote_url;
pub use remote_url::*;
