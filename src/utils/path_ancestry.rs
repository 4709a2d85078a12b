use std::path::{Path, PathBuf};

/// Walks from a path up towards the root of the filesystem, see
/// [`get_path_ancestry`].
///
/// Cloning the iterator restarts the walk from where the clone was taken.
#[derive(Debug, Clone)]
pub struct PathAncestry {
    next: Option<PathBuf>,
}

impl Iterator for PathAncestry {
    type Item = PathBuf;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = parent_of(&current).filter(|parent| *parent != current);

        Some(current)
    }
}

/// The parent directory of `path`. The parent of a single relative component
/// is `.`, which is its own parent.
fn parent_of(path: &Path) -> Option<PathBuf> {
    match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => {
            (path != Path::new(".")).then(|| PathBuf::from("."))
        }
        parent => parent.map(Path::to_path_buf),
    }
}

/// Returns the directories containing `path`, from the most specific one up
/// to the root, inclusive. A directory is its own first ancestor while a file
/// starts the walk from its parent directory.
///
/// Relative paths aren't resolved, their ancestry ends at `.`.
#[must_use]
pub fn get_path_ancestry(path: &Path) -> PathAncestry {
    let start = if path.is_dir() {
        Some(path.to_path_buf())
    } else {
        parent_of(path)
    };

    PathAncestry { next: start }
}
