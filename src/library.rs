//! Library module: track metadata and source enumeration.
//!
//! `model` holds the per-file metadata and the caller-forced overrides,
//! `read` parses tags out of raw file bytes and `scan` lists the candidate
//! files of an input tree.

mod model;
mod read;
mod scan;

pub use model::*;
pub use read::{MetadataError, read_metadata};
pub use scan::{dotted_extension, scan};
