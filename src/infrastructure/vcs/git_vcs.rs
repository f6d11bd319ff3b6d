use super::vcs_interface::{run_step, VcsError, VcsUpdater};
use crate::domain::value_objects::vcs_kind::VcsKind;
use crate::infrastructure::process::command_runner::CommandRunner;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

/// Git implementation of the update procedure.
///
/// A Git checkout is brought up to date with five steps, strictly in order:
///
/// 1. `git pull --ff-only`
/// 2. `git submodule update --init` (only when `.gitmodules` is present)
/// 3. `git remote prune origin`
/// 4. `git remote set-head origin --auto`
/// 5. `git gc`
///
/// The first step that exits non-zero fails the whole checkout and the
/// remaining steps are not attempted.
pub struct GitVcs {
    runner: Arc<dyn CommandRunner>,
    executable: String,
}

impl GitVcs {
    /// Create a new Git updater using the default `git` executable.
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            runner,
            executable: VcsKind::Git.executable_name().to_string(),
        }
    }

    /// Create a new Git updater with a custom executable path.
    pub fn with_executable(runner: Arc<dyn CommandRunner>, executable: impl Into<String>) -> Self {
        Self {
            runner,
            executable: executable.into(),
        }
    }

    async fn git(&self, args: &[&str], checkout: &Path) -> Result<(), VcsError> {
        run_step(self.runner.as_ref(), &self.executable, args, checkout).await
    }
}

#[async_trait]
impl VcsUpdater for GitVcs {
    async fn update(&self, checkout: &Path) -> Result<(), VcsError> {
        self.git(&["pull", "--ff-only"], checkout).await?;

        // Submodules are only touched when the checkout declares them.
        if checkout.join(".gitmodules").is_file() {
            self.git(&["submodule", "update", "--init"], checkout).await?;
        }

        self.git(&["remote", "prune", "origin"], checkout).await?;
        self.git(&["remote", "set-head", "origin", "--auto"], checkout)
            .await?;
        self.git(&["gc"], checkout).await?;

        Ok(())
    }

    fn kind(&self) -> VcsKind {
        VcsKind::Git
    }
}
