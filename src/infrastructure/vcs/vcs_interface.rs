use crate::domain::value_objects::vcs_kind::VcsKind;
use crate::infrastructure::process::command_runner::{CommandError, CommandRunner};
use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// Common interface for per-VCS update procedures.
#[async_trait]
pub trait VcsUpdater: Send + Sync {
    /// Run the fixed update sequence for the checkout at `checkout`.
    ///
    /// The sequence stops at the first command that exits non-zero; commands
    /// already issued are not rolled back. Only the exit status of each
    /// command is consulted, never its output.
    async fn update(&self, checkout: &Path) -> Result<(), VcsError>;

    /// Get the VCS kind this implementation handles.
    fn kind(&self) -> VcsKind;
}

/// Errors that can occur while updating one checkout.
#[derive(Debug, Error)]
pub enum VcsError {
    /// An update command completed with a non-zero exit status
    #[error("command '{command}' exited with status {exit_code} in {path}")]
    CommandFailed {
        /// The command line that failed
        command: String,
        /// Exit status of the command (-1 when killed by a signal)
        exit_code: i32,
        /// Checkout the command ran in
        path: String,
    },

    /// An update command could not be launched at all
    #[error("command could not be run: {0}")]
    Launch(#[from] CommandError),
}

/// Run one step of an update sequence and translate a non-zero exit status
/// into a [`VcsError`].
pub(crate) async fn run_step(
    runner: &dyn CommandRunner,
    program: &str,
    args: &[&str],
    checkout: &Path,
) -> Result<(), VcsError> {
    let exit = runner.run(program, args, checkout).await?;
    if !exit.success() {
        let command = if args.is_empty() {
            program.to_string()
        } else {
            format!("{} {}", program, args.join(" "))
        };
        return Err(VcsError::CommandFailed {
            command,
            exit_code: exit.code.unwrap_or(-1),
            path: checkout.display().to_string(),
        });
    }
    Ok(())
}
