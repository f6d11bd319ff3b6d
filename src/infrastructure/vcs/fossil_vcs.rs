use super::vcs_interface::{run_step, VcsError, VcsUpdater};
use crate::domain::value_objects::vcs_kind::VcsKind;
use crate::infrastructure::process::command_runner::CommandRunner;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

/// Fossil implementation of the update procedure.
///
/// A Fossil checkout is brought up to date with a single `fossil pull`
/// from its configured remote.
pub struct FossilVcs {
    runner: Arc<dyn CommandRunner>,
    executable: String,
}

impl FossilVcs {
    /// Create a new Fossil updater using the default `fossil` executable.
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            runner,
            executable: VcsKind::Fossil.executable_name().to_string(),
        }
    }

    /// Create a new Fossil updater with a custom executable path.
    pub fn with_executable(runner: Arc<dyn CommandRunner>, executable: impl Into<String>) -> Self {
        Self {
            runner,
            executable: executable.into(),
        }
    }
}

#[async_trait]
impl VcsUpdater for FossilVcs {
    async fn update(&self, checkout: &Path) -> Result<(), VcsError> {
        run_step(self.runner.as_ref(), &self.executable, &["pull"], checkout).await
    }

    fn kind(&self) -> VcsKind {
        VcsKind::Fossil
    }
}
