use std::io;
use std::path::{Path, PathBuf};

/// List the immediate child directories of `root`, sorted by name.
///
/// Non-directory entries (regular files, symlinks to files) are excluded;
/// symlinks that resolve to directories count. Grandchildren are never
/// visited. The lexicographic ordering makes repeated runs visit checkouts
/// in the same sequence.
pub fn list_child_dirs(root: &Path) -> io::Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(dirs)
}
