use std::io::Cursor;

use lofty::config::ParseOptions;
use lofty::error::LoftyError;
use lofty::prelude::*;
use lofty::probe::Probe;
use lofty::tag::{ItemKey, Tag};

use super::model::TrackMetadata;

/// Failure to get tag fields out of a file's bytes.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    /// The container is unrecognized or structurally invalid.
    #[error(transparent)]
    Container(#[from] LoftyError),
    /// The container parsed but holds no tag at all.
    #[error("no metadata tag found")]
    NoTag,
}

// Only tag fields are needed; skip audio properties and pictures.
fn parse_options() -> ParseOptions {
    ParseOptions::new().read_properties(false).read_cover_art(false)
}

fn text(v: Option<std::borrow::Cow<'_, str>>) -> String {
    v.map(|s| s.into_owned()).unwrap_or_default()
}

fn album_artist(tag: &Tag) -> String {
    tag.items()
        .find(|item| matches!(item.key(), ItemKey::AlbumArtist))
        .and_then(|item| item.value().text())
        .map(str::to_string)
        .unwrap_or_default()
}

/// Parse the raw `content` of a file into its track metadata.
///
/// Field presence is not validated here: missing fields come back empty and
/// a missing track number comes back as 0.
pub fn read_metadata(content: &[u8], source_extension: &str) -> Result<TrackMetadata, MetadataError> {
    let tagged = Probe::new(Cursor::new(content))
        .options(parse_options())
        .guess_file_type()
        .map_err(LoftyError::from)?
        .read()?;

    let tag = tagged
        .primary_tag()
        .or_else(|| tagged.first_tag())
        .ok_or(MetadataError::NoTag)?;

    Ok(TrackMetadata {
        artist: text(tag.artist()),
        album_artist: album_artist(tag),
        album: text(tag.album()),
        title: text(tag.title()),
        track_number: tag.track().unwrap_or(0),
        source_extension: source_extension.to_string(),
    })
}
