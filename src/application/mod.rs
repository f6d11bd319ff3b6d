//! Application layer: use cases driving the synchronization engine.

pub mod use_cases;
