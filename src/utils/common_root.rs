use std::{
    io,
    path::{Path, PathBuf},
};

use crate::utils::path_ancestry::get_path_ancestry;

/// Find the deepest directory which contains all of `paths`. The paths are
/// canonicalised first so they must exist.
///
/// Returns the current directory when `paths` is empty.
pub fn get_common_root<I, P>(paths: I) -> io::Result<PathBuf>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut common_root: Option<PathBuf> = None;

    for path in paths {
        let path = path.as_ref().canonicalize()?;
        let directory = get_path_ancestry(&path)
            .next()
            .unwrap_or_else(|| path.clone());

        common_root = Some(match common_root {
            None => directory,
            Some(root) => get_path_ancestry(&root)
                .find(|ancestor| directory.starts_with(ancestor))
                .unwrap_or(root),
        });
    }

    common_root.map_or_else(|| Path::new(".").canonicalize(), Ok)
}
