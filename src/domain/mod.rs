//! Domain layer: core value objects shared by the rest of the crate.

pub mod value_objects;
