use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::library::{MetadataOverride, TrackMetadata};

/// A tag field that is required to build a destination path.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MetadataField {
    Artist,
    Album,
    Title,
    Track,
}

impl fmt::Display for MetadataField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Artist => "artist",
            Self::Album => "album",
            Self::Title => "title",
            Self::Track => "track",
        })
    }
}

/// Characters dropped from every path segment.
const STRIPPED: &[char] = &[
    '"', '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '<', '>', '?', ':', '{', '}', '[', ']',
    '\'', '-', ',', '.',
];

/// Turn a tag value into a filesystem-safe path segment.
///
/// Punctuation is removed and spaces become underscores; a second pass then
/// collapses every run of underscores into one.
pub fn escape(s: &str) -> String {
    let replaced: String = s
        .chars()
        .filter(|c| !STRIPPED.contains(c))
        .map(|c| if c == ' ' { '_' } else { c })
        .collect();

    let mut out = String::with_capacity(replaced.len());
    for c in replaced.chars() {
        if c == '_' && out.ends_with('_') {
            continue;
        }
        out.push(c);
    }
    out
}

/// Compute `Artist/Album/NN_Title.ext` for a track.
///
/// The artist is the forced artist, else the album artist, else the track
/// artist; the album is the forced album, else the tagged one. Title and
/// track number always come from the file. Validation stops at the first
/// missing field, checked in artist, album, title, track order.
pub fn destination_path(
    metadata: &TrackMetadata,
    overrides: &MetadataOverride,
) -> Result<PathBuf, MetadataField> {
    let tagged_artist = if metadata.album_artist.is_empty() {
        metadata.artist.as_str()
    } else {
        metadata.album_artist.as_str()
    };
    let artist = overrides.artist().unwrap_or(tagged_artist);
    let album = overrides.album().unwrap_or(metadata.album.as_str());

    if artist.is_empty() {
        return Err(MetadataField::Artist);
    }
    if album.is_empty() {
        return Err(MetadataField::Album);
    }
    if metadata.title.is_empty() {
        return Err(MetadataField::Title);
    }
    if metadata.track_number == 0 {
        return Err(MetadataField::Track);
    }

    let file_name = format!(
        "{:02}_{}{}",
        metadata.track_number,
        escape(&metadata.title),
        metadata.source_extension
    );

    let mut path = PathBuf::new();
    for segment in [escape(artist), escape(album), file_name] {
        push_relative(&mut path, &segment);
    }
    Ok(path)
}

/// Append only the normal components of `segment`, so a tag value holding a
/// root or separators can never lift the result out of the output tree.
fn push_relative(path: &mut PathBuf, segment: &str) {
    for component in Path::new(segment).components() {
        if let Component::Normal(part) = component {
            path.push(part);
        }
    }
}
