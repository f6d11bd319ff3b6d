use crate::infrastructure::filesystem::dir_lister::list_child_dirs;
use crate::infrastructure::process::command_runner::{CommandRunner, ProcessCommandRunner};
use crate::infrastructure::vcs::VcsFactory;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Fatal startup conditions for a run.
///
/// These abort before any checkout is touched. Everything that goes wrong
/// below the root — a failing command, a directory that vanished mid-run —
/// is contained at the per-checkout boundary and surfaces only in the
/// summary's failure list.
#[derive(Debug, Error)]
pub enum UpdateCheckoutsError {
    /// The configured root does not exist
    #[error("Root directory not found: {0}")]
    RootNotFound(String),

    /// The configured root exists but is not a directory
    #[error("Root path is not a directory: {0}")]
    RootNotADirectory(String),

    /// The root directory could not be listed
    #[error("Failed to list root directory {path}: {source}")]
    EnumerationFailed {
        /// The root that could not be listed
        path: String,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

/// Configuration for a checkout update run.
#[derive(Debug, Clone)]
pub struct UpdateCheckoutsConfig {
    /// Root directory whose immediate subdirectories are the checkouts
    pub root: PathBuf,
}

impl UpdateCheckoutsConfig {
    /// Create a configuration for the given root directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

/// Terminal state of one checkout within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// No recognized VCS marker; the directory was not touched
    Skipped,
    /// The full update sequence completed
    Updated,
    /// Some step of the update sequence failed
    Failed,
}

/// Accumulated results of a full run.
#[derive(Debug, Clone, Default)]
pub struct UpdateSummary {
    /// Number of checkouts whose update sequence completed
    pub updated_count: usize,

    /// Number of directories skipped for lack of a VCS marker
    pub skipped_count: usize,

    /// Names of checkouts whose update failed, in processing order
    pub failed: Vec<String>,
}

impl UpdateSummary {
    /// Whether every attempted checkout updated cleanly.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    /// Total number of directories given a terminal state.
    pub fn total_count(&self) -> usize {
        self.updated_count + self.skipped_count + self.failed.len()
    }
}

/// Use case that drives one full synchronization run.
///
/// Checkouts are processed strictly sequentially: each one reaches its
/// terminal state (skipped, updated, or failed) before the next is looked at.
pub struct UpdateCheckoutsUseCase {
    config: UpdateCheckoutsConfig,
    runner: Arc<dyn CommandRunner>,
}

impl UpdateCheckoutsUseCase {
    /// Create a use case that runs real VCS processes.
    pub fn new(config: UpdateCheckoutsConfig) -> Self {
        Self::with_runner(config, Arc::new(ProcessCommandRunner::new()))
    }

    /// Create a use case with a custom command runner.
    pub fn with_runner(config: UpdateCheckoutsConfig, runner: Arc<dyn CommandRunner>) -> Self {
        Self { config, runner }
    }

    /// Execute the run and return the accumulated summary.
    pub async fn execute(&self) -> Result<UpdateSummary, UpdateCheckoutsError> {
        // 1. Validate the root before anything else is touched
        self.check_root()?;

        // 2. Enumerate the candidate checkouts in deterministic order
        let children = list_child_dirs(&self.config.root).map_err(|source| {
            UpdateCheckoutsError::EnumerationFailed {
                path: self.config.root.display().to_string(),
                source,
            }
        })?;

        // 3. Drive every checkout to its terminal state
        let mut summary = UpdateSummary::default();
        for dir in children {
            match self.process_checkout(&dir).await {
                CheckoutOutcome::Skipped => summary.skipped_count += 1,
                CheckoutOutcome::Updated => summary.updated_count += 1,
                CheckoutOutcome::Failed => summary.failed.push(dir_name(&dir)),
            }
        }

        Ok(summary)
    }

    fn check_root(&self) -> Result<(), UpdateCheckoutsError> {
        let root = &self.config.root;
        if !root.exists() {
            return Err(UpdateCheckoutsError::RootNotFound(
                root.display().to_string(),
            ));
        }
        if !root.is_dir() {
            return Err(UpdateCheckoutsError::RootNotADirectory(
                root.display().to_string(),
            ));
        }
        Ok(())
    }

    /// Drive one checkout to its terminal state.
    ///
    /// Errors never escape this boundary; a failing checkout must not keep
    /// its siblings from being attempted.
    async fn process_checkout(&self, dir: &Path) -> CheckoutOutcome {
        let Some(kind) = VcsFactory::detect(dir) else {
            debug!(dir = %dir.display(), "no VCS marker, skipping");
            return CheckoutOutcome::Skipped;
        };

        debug!(dir = %dir.display(), kind = %kind, "updating checkout");
        let updater = VcsFactory::create(kind, Arc::clone(&self.runner));
        match updater.update(dir).await {
            Ok(()) => CheckoutOutcome::Updated,
            Err(err) => {
                warn!(dir = %dir.display(), error = %err, "checkout update failed");
                CheckoutOutcome::Failed
            }
        }
    }
}

fn dir_name(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string())
}
