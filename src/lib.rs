//! # repoup - Checkout Tree Updater
//!
//! `repoup` keeps a collection of version-controlled checkouts — the immediate
//! subdirectories of a single root — synchronized with their upstream sources.
//! It is meant for read-only reference clones where no local edits or merge
//! conflicts are expected.
//!
//! Each child directory is classified by its marker directory (`.git`, `.hg`,
//! or `.fossil-settings`) and updated with the fixed command sequence for that
//! system. A directory with no recognized marker is skipped. A failing
//! directory is reported at the end of the run and never prevents its
//! siblings from being attempted.
//!
//! ## Quick Start
//!
//! ```bash
//! repoup --root ~/reference
//! ```
//!
//! On a clean run the tool prints nothing. When some checkouts fail, their
//! names are listed after the run; the exit status stays zero as long as the
//! root itself could be processed.
//!
//! ## Architecture
//!
//! The crate is organized using clean architecture principles:
//!
//! - [`domain`]: Core value objects (the supported VCS kinds)
//! - [`application`]: The update-checkouts use case driving a full run
//! - [`infrastructure`]: Directory enumeration, process execution, and the
//!   per-VCS update procedures
//! - [`presentation`]: CLI interface and report rendering

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types for convenience
pub use crate::application::use_cases::update_checkouts::{
    UpdateCheckoutsConfig, UpdateCheckoutsError, UpdateCheckoutsUseCase, UpdateSummary,
};
pub use crate::domain::value_objects::vcs_kind::VcsKind;
