use std::path::{Path, PathBuf};

use lofty::error::LoftyError;

use crate::library::{dotted_extension, read_metadata, scan};
use crate::tree::{DestinationTree, SourceTree, resolve};

use super::error::Error;
use super::mapping::FileMapping;
use super::path::destination_path;
use super::retag::rewrite_tags;
use super::RunConfig;

/// Counts reported at the end of a successful run.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub copied: usize,
    pub retagged: usize,
}

/// Drives one input tree through enumerate → map → copy → retag.
///
/// Every phase completes before the next starts and the first error stops the
/// run. Files written before a failure stay on disk.
pub struct Organizer<'a> {
    config: &'a RunConfig,
    input: &'a dyn SourceTree,
    output: &'a dyn DestinationTree,
}

impl<'a> Organizer<'a> {
    pub fn new(
        config: &'a RunConfig,
        input: &'a dyn SourceTree,
        output: &'a dyn DestinationTree,
    ) -> Result<Self, Error> {
        if config.overrides.active() && config.output_root.is_none() {
            return Err(Error::Configuration(
                "an output root is required when metadata overrides are set".to_string(),
            ));
        }
        Ok(Self {
            config,
            input,
            output,
        })
    }

    pub fn run(&self) -> Result<RunSummary, Error> {
        let files = scan(self.input, &self.config.extensions).map_err(Error::Walk)?;
        let mapping = self.build_mapping(&files)?;
        let copied = self.copy_all(&mapping)?;

        let retagged = match &self.config.output_root {
            Some(root) if self.config.overrides.active() => self.retag_all(root, &mapping)?,
            _ => 0,
        };

        Ok(RunSummary { copied, retagged })
    }

    /// Compute every destination before anything is written.
    fn build_mapping(&self, files: &[PathBuf]) -> Result<FileMapping, Error> {
        let mut mapping = FileMapping::default();

        for source in files {
            let destination = self.destination_for(source)?;
            tracing::debug!(
                source = %source.display(),
                destination = %destination.display(),
                "mapped"
            );
            mapping.push(source.to_path_buf(), destination);
        }

        Ok(mapping)
    }

    fn read_source(&self, source: &Path) -> Result<Vec<u8>, Error> {
        self.input.read_file(source).map_err(|e| {
            tracing::error!(path = %source.display(), error = %e, "error reading source file");
            Error::Read {
                path: source.to_path_buf(),
                source: e,
            }
        })
    }

    fn destination_for(&self, source: &Path) -> Result<PathBuf, Error> {
        let content = self.read_source(source)?;

        let extension = dotted_extension(source).unwrap_or_default();
        let metadata = read_metadata(&content, &extension).map_err(|e| {
            tracing::error!(path = %source.display(), error = %e, "error parsing metadata");
            Error::Parse {
                path: source.to_path_buf(),
                source: e,
            }
        })?;

        destination_path(&metadata, &self.config.overrides).map_err(|field| {
            tracing::error!(path = %source.display(), %field, "missing metadata");
            Error::MissingMetadata {
                path: source.to_path_buf(),
                field,
            }
        })
    }

    fn copy_all(&self, mapping: &FileMapping) -> Result<usize, Error> {
        let write_error = |path: &Path, e: std::io::Error| {
            tracing::error!(path = %path.display(), error = %e, "error writing output");
            Error::Write {
                path: path.to_path_buf(),
                source: e,
            }
        };

        for (source, destination) in mapping.iter() {
            if let Some(parent) = destination.parent() {
                self.output
                    .make_dir_all(parent)
                    .map_err(|e| write_error(parent, e))?;
            }

            let content = self.read_source(source)?;

            self.output
                .write_file(destination, &content)
                .map_err(|e| write_error(destination, e))?;

            tracing::debug!(
                source = %source.display(),
                destination = %destination.display(),
                bytes = content.len(),
                "copied"
            );
        }

        Ok(mapping.len())
    }

    fn retag_all(&self, root: &Path, mapping: &FileMapping) -> Result<usize, Error> {
        let mut count = 0;

        for destination in mapping.destinations() {
            let path = root.join(destination);
            resolve(root, destination)
                .map_err(LoftyError::from)
                .and_then(|resolved| rewrite_tags(&resolved, &self.config.overrides))
                .map_err(|e| {
                    tracing::error!(path = %path.display(), error = %e, "error rewriting tags");
                    Error::TagRewrite {
                        path: path.clone(),
                        source: e,
                    }
                })?;
            tracing::debug!(path = %path.display(), "retagged");
            count += 1;
        }

        Ok(count)
    }
}
