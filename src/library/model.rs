/// Tag fields of a single source file, as read from its metadata container.
///
/// Empty strings mean the field is absent; a `track_number` of 0 means the
/// file carries no track number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackMetadata {
    pub artist: String,
    pub album_artist: String,
    pub album: String,
    pub title: String,
    pub track_number: u32,
    /// Extension of the source file, including the leading dot.
    pub source_extension: String,
}

/// Values forced by the caller over the embedded tags.
///
/// Each field is independently absent or set. Empty strings are treated as
/// absent, so `Some` always carries a non-empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataOverride {
    artist: Option<String>,
    album: Option<String>,
    album_artist: Option<String>,
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.is_empty())
}

impl MetadataOverride {
    pub fn new(artist: Option<String>, album: Option<String>, album_artist: Option<String>) -> Self {
        Self {
            artist: non_empty(artist),
            album: non_empty(album),
            album_artist: non_empty(album_artist),
        }
    }

    pub fn artist(&self) -> Option<&str> {
        self.artist.as_deref()
    }

    pub fn album(&self) -> Option<&str> {
        self.album.as_deref()
    }

    pub fn album_artist(&self) -> Option<&str> {
        self.album_artist.as_deref()
    }

    /// True when at least one field is forced.
    pub fn active(&self) -> bool {
        self.artist.is_some() || self.album.is_some() || self.album_artist.is_some()
    }
}
