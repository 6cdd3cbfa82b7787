use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Ordered source → destination pairs for one run.
///
/// Order is the enumeration order of the sources. Two sources may map to the
/// same destination; the later one overwrites the earlier on copy.
#[derive(Debug, Clone, Default)]
pub struct FileMapping {
    pairs: Vec<(PathBuf, PathBuf)>,
    destinations: HashSet<PathBuf>,
}

impl FileMapping {
    pub fn push(&mut self, source: PathBuf, destination: PathBuf) {
        if !self.destinations.insert(destination.clone()) {
            tracing::warn!(
                source = %source.display(),
                destination = %destination.display(),
                "destination already mapped, later copy overwrites earlier"
            );
        }
        self.pairs.push((source, destination));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Path, &Path)> {
        self.pairs.iter().map(|(s, d)| (s.as_path(), d.as_path()))
    }

    pub fn destinations(&self) -> impl Iterator<Item = &Path> {
        self.pairs.iter().map(|(_, d)| d.as_path())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
