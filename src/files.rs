//! Find Python files to analyze
use std::{
    path::{Path, PathBuf},
    sync::{Arc, mpsc},
};

use ignore::{WalkBuilder, WalkState};

use crate::error::{Error, Result};

/// File extensions considered Python sources (implementation and stub files)
const PY_EXTENSIONS: &[&str] = &["py", "pyi"];

fn is_python_source(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| PY_EXTENSIONS.contains(&ext))
}

/// Collect the paths of Python files under the provided roots, in parallel.
///
/// Roots can be folders (searched recursively) or individual files; explicit
/// paths to non-Python files are silently dropped. `.ignore`, `.gitignore`
/// and `.tlignore` files apply while walking, hidden files are kept, and
/// neither the global git ignore nor parent-folder gitignores are consulted.
/// Anything listed in `exclude` is pruned from the walk. All returned paths
/// are canonical.
pub fn find_py_files<T: AsRef<Path>>(
    paths: &[T],
    exclude: &[T],
    sort: bool,
) -> Result<Vec<PathBuf>> {
    let canonicalize = |path: &T| {
        dunce::canonicalize(path.as_ref()).map_err(|err| Error::IOError {
            path: path.as_ref().to_path_buf(),
            err,
        })
    };
    let exclude = Arc::new(exclude.iter().map(canonicalize).collect::<Result<Vec<_>>>()?);

    let roots: Vec<PathBuf> = paths
        .iter()
        .map(canonicalize)
        .filter(|path| match path {
            Ok(path) => path.is_dir() || is_python_source(path),
            Err(_) => true, // keep errors so they surface below
        })
        .collect::<Result<_>>()?;
    let Some((first, rest)) = roots.split_first() else {
        return Ok(Vec::new());
    };

    let mut builder = WalkBuilder::new(first);
    for root in rest {
        builder.add(root);
    }
    builder
        .hidden(false)
        .git_global(false)
        .git_exclude(false)
        .add_custom_ignore_filename(".tlignore");

    let (tx, rx) = mpsc::channel::<PathBuf>();
    builder.build_parallel().run(|| {
        let tx = tx.clone();
        let exclude = Arc::clone(&exclude);
        Box::new(move |entry| {
            let Ok(entry) = entry else {
                return WalkState::Continue;
            };
            let path = entry.path();
            if exclude.iter().any(|excluded| excluded.as_path() == path) {
                // prunes excluded folders and drops excluded files
                return WalkState::Skip;
            }
            if path.is_dir() {
                return WalkState::Continue;
            }
            if is_python_source(path) && tx.send(path.to_path_buf()).is_err() {
                return WalkState::Quit;
            }
            WalkState::Continue
        })
    });
    drop(tx);

    // the workers are done once the last sender is gone
    let mut files: Vec<PathBuf> = rx.iter().collect();
    if sort {
        files.sort_unstable();
    }
    Ok(files)
}
