//! Organizer: turns an input tree into `Artist/Album/NN_Title.ext` copies.
//!
//! A run enumerates matching files, computes every destination up front,
//! copies the bytes unchanged and, when any override is set, rewrites the
//! forced fields in the copies' tags.

mod copy;
mod error;
mod mapping;
mod path;
mod retag;

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::library::MetadataOverride;

pub use copy::{Organizer, RunSummary};
pub use error::Error;
pub use path::MetadataField;

pub const DEFAULT_EXTENSION: &str = ".mp3";

/// Everything a run needs besides the trees themselves.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Literal extensions, dot included, compared case-sensitively.
    pub extensions: BTreeSet<String>,
    pub overrides: MetadataOverride,
    /// On-disk root of the output tree. Required when `overrides` is active,
    /// since the tag rewrite reopens each copy by path.
    pub output_root: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            extensions: BTreeSet::from([DEFAULT_EXTENSION.to_string()]),
            overrides: MetadataOverride::default(),
            output_root: None,
        }
    }
}
