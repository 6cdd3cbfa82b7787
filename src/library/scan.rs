use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};

use crate::tree::SourceTree;

/// The extension of `path` including its leading dot, e.g. `".mp3"`.
///
/// Comparison against the configured set is exact: `".MP3"` and `".mp3"`
/// are different extensions.
pub fn dotted_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| format!(".{ext}"))
}

/// List the files of `tree` whose extension is in `extensions`, in walk order.
pub fn scan(tree: &dyn SourceTree, extensions: &BTreeSet<String>) -> io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    for path in tree.walk()? {
        let matches = dotted_extension(&path).is_some_and(|ext| extensions.contains(&ext));
        if !matches {
            tracing::debug!(path = %path.display(), "skipping due to extension filter");
            continue;
        }
        found.push(path);
    }

    Ok(found)
}
