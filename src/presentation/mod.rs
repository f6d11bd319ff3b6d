//! Presentation layer: CLI surface and report rendering.

pub mod cli;
