//! Value objects of the domain layer.

pub mod vcs_kind;

pub use vcs_kind::VcsKind;
