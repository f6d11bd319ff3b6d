use super::fossil_vcs::FossilVcs;
use super::git_vcs::GitVcs;
use super::hg_vcs::HgVcs;
use super::vcs_interface::VcsUpdater;
use crate::domain::value_objects::vcs_kind::VcsKind;
use crate::infrastructure::process::command_runner::CommandRunner;
use std::path::Path;
use std::sync::Arc;

/// Factory for creating VCS updater instances and classifying checkouts.
pub struct VcsFactory;

impl VcsFactory {
    /// Create the updater for the given VCS kind.
    pub fn create(kind: VcsKind, runner: Arc<dyn CommandRunner>) -> Arc<dyn VcsUpdater> {
        match kind {
            VcsKind::Git => Arc::new(GitVcs::new(runner)),
            VcsKind::Hg => Arc::new(HgVcs::new(runner)),
            VcsKind::Fossil => Arc::new(FossilVcs::new(runner)),
        }
    }

    /// Detect which VCS manages the checkout at `path`.
    ///
    /// Marker directories are tested in fixed priority order (`.git`, `.hg`,
    /// `.fossil-settings`); the first present marker wins. Only directory-type
    /// markers count. A checkout with no recognized marker yields `None`.
    pub fn detect(path: &Path) -> Option<VcsKind> {
        VcsKind::ALL
            .iter()
            .copied()
            .find(|kind| path.join(kind.marker_dir()).is_dir())
    }
}
