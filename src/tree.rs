//! Filesystem capabilities consumed by the organizer.
//!
//! The organizer only ever sees relative paths; a tree resolves them
//! against its own root. `DirTree` is the on-disk implementation.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

/// A tree files are read from.
pub trait SourceTree {
    /// Every regular file under the root, relative to it, in a stable
    /// depth-first order that is lexical within each directory.
    fn walk(&self) -> io::Result<Vec<PathBuf>>;

    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// A tree files are written to.
pub trait DestinationTree {
    /// Create `path` and all of its parents; existing directories are fine.
    fn make_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Create or truncate `path` and write `content` to it.
    fn write_file(&self, path: &Path, content: &[u8]) -> io::Result<()>;
}

/// A directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct DirTree {
    root: PathBuf,
}

impl DirTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

/// Join `path` under `root`, refusing anything but plain relative components.
pub fn resolve(root: &Path, path: &Path) -> io::Result<PathBuf> {
    if let Some(bad) = path
        .components()
        .find(|c| !matches!(c, Component::Normal(_)))
    {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "{} leaves the tree at {:?}",
                path.display(),
                bad.as_os_str()
            ),
        ));
    }
    Ok(root.join(path))
}

fn walk_error(err: walkdir::Error) -> io::Error {
    let kind = err.io_error().map_or(io::ErrorKind::Other, io::Error::kind);
    io::Error::new(kind, err)
}

impl SourceTree for DirTree {
    fn walk(&self) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry.map_err(walk_error)?;
            if !entry.file_type().is_file() {
                continue;
            }
            // Entries always live under the walk root.
            if let Ok(rel) = entry.path().strip_prefix(&self.root) {
                files.push(rel.to_path_buf());
            }
        }

        Ok(files)
    }

    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(resolve(&self.root, path)?)
    }
}

impl DestinationTree for DirTree {
    fn make_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(resolve(&self.root, path)?)
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        fs::write(resolve(&self.root, path)?, content)
    }
}
