use std::fs::OpenOptions;
use std::io::Seek;
use std::path::Path;

use lofty::config::WriteOptions;
use lofty::error::{ErrorKind, LoftyError};
use lofty::prelude::*;
use lofty::probe::Probe;
use lofty::tag::{ItemKey, Tag};

use crate::library::MetadataOverride;

/// Overwrite the forced fields in the primary tag of the file at `path`.
///
/// Fields without an override are left exactly as they were. A file with no
/// tag gets a fresh one of its format's primary type. The album artist is
/// written through the same key the reader uses (TPE2 for ID3v2).
///
/// The file is opened once and the handle is dropped on every return path,
/// including parse and save failures.
pub fn rewrite_tags(path: &Path, overrides: &MetadataOverride) -> Result<(), LoftyError> {
    let mut file = OpenOptions::new().read(true).write(true).open(path)?;

    let mut tagged = Probe::new(&mut file).guess_file_type()?.read()?;

    let tag_type = tagged.primary_tag_type();
    if tagged.primary_tag().is_none() {
        tagged.insert_tag(Tag::new(tag_type));
    }
    let Some(tag) = tagged.primary_tag_mut() else {
        return Err(LoftyError::new(ErrorKind::UnsupportedTag));
    };

    if let Some(artist) = overrides.artist() {
        tag.set_artist(artist.to_string());
    }
    if let Some(album) = overrides.album() {
        tag.set_album(album.to_string());
    }
    if let Some(album_artist) = overrides.album_artist() {
        tag.insert_text(ItemKey::AlbumArtist, album_artist.to_string());
    }

    file.rewind()?;
    tag.save_to(&mut file, WriteOptions::default())
}
