//! External process execution.

pub mod command_runner;

pub use command_runner::{CommandError, CommandRunner, ExitInfo, ProcessCommandRunner};
