use super::vcs_interface::{run_step, VcsError, VcsUpdater};
use crate::domain::value_objects::vcs_kind::VcsKind;
use crate::infrastructure::process::command_runner::CommandRunner;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

/// Mercurial implementation of the update procedure.
///
/// A Mercurial checkout is brought up to date with a single
/// `hg update`, moving the working directory to the latest available
/// revision.
pub struct HgVcs {
    runner: Arc<dyn CommandRunner>,
    executable: String,
}

impl HgVcs {
    /// Create a new Mercurial updater using the default `hg` executable.
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            runner,
            executable: VcsKind::Hg.executable_name().to_string(),
        }
    }

    /// Create a new Mercurial updater with a custom executable path.
    pub fn with_executable(runner: Arc<dyn CommandRunner>, executable: impl Into<String>) -> Self {
        Self {
            runner,
            executable: executable.into(),
        }
    }
}

#[async_trait]
impl VcsUpdater for HgVcs {
    async fn update(&self, checkout: &Path) -> Result<(), VcsError> {
        run_step(self.runner.as_ref(), &self.executable, &["update"], checkout).await
    }

    fn kind(&self) -> VcsKind {
        VcsKind::Hg
    }
}
