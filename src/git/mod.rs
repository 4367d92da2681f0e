//! Git environment: where to commit and whether git is available.

pub mod tool;
pub mod workdir;

pub use tool::check_git_installed;
pub use workdir::resolve_working_directory;
