//! Use cases of the application layer.

pub mod update_checkouts;
