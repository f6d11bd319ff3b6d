//! VCS update infrastructure
//!
//! This module provides a unified interface over the supported version
//! control systems: Git, Mercurial (hg), and Fossil.

pub mod fossil_vcs;
pub mod git_vcs;
pub mod hg_vcs;
pub mod vcs_factory;
pub mod vcs_interface;

pub use vcs_factory::VcsFactory;
pub use vcs_interface::{VcsError, VcsUpdater};
