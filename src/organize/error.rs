use std::io;
use std::path::PathBuf;

use lofty::error::LoftyError;

use crate::library::MetadataError;

use super::path::MetadataField;

/// Every way an organize run can stop.
///
/// Paths are relative to their tree, except for `TagRewrite` which names
/// the absolute destination that was reopened.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("failed to walk input tree")]
    Walk(#[source] io::Error),

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse metadata of {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: MetadataError,
    },

    #[error("missing metadata in {}: {}", .path.display(), .field)]
    MissingMetadata { path: PathBuf, field: MetadataField },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to rewrite tags of {}", .path.display())]
    TagRewrite {
        path: PathBuf,
        #[source]
        source: LoftyError,
    },
}
