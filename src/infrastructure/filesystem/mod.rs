//! File system operations.

pub mod dir_lister;

pub use dir_lister::list_child_dirs;
