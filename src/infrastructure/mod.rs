//! Infrastructure layer modules
//!
//! This layer provides concrete implementations for external system
//! interactions:
//! - VCS update procedures (Git, Mercurial, Fossil)
//! - File system enumeration
//! - Process execution (command runner)

pub mod filesystem;
pub mod process;
pub mod vcs;

// Re-export commonly used types
pub use process::{CommandRunner, ProcessCommandRunner};
pub use vcs::{VcsError, VcsFactory, VcsUpdater};
