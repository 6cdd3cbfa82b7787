//! Fixture helpers shared by the unit tests.
//!
//! Fixtures are real (silent, zero-filled) MPEG-1 Layer III streams so the
//! tag reader and writer treat them exactly like files from a music library.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use lofty::config::WriteOptions;
use lofty::prelude::*;
use lofty::tag::{ItemKey, Tag, TagType};

use crate::tree::{DestinationTree, SourceTree};

/// MPEG-1 Layer III, 128 kbps, 44.1 kHz, joint stereo, no CRC.
const FRAME_HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0x64];
/// 144 * 128000 / 44100, no padding.
const FRAME_LEN: usize = 417;
const FRAME_COUNT: usize = 4;

fn mpeg_frames() -> Vec<u8> {
    let mut out = Vec::with_capacity(FRAME_LEN * FRAME_COUNT);
    for _ in 0..FRAME_COUNT {
        out.extend_from_slice(&FRAME_HEADER);
        out.resize(out.len() + FRAME_LEN - FRAME_HEADER.len(), 0);
    }
    out
}

#[derive(Debug, Clone, Copy)]
pub struct TagSpec<'a> {
    pub artist: &'a str,
    pub album_artist: &'a str,
    pub album: &'a str,
    pub title: &'a str,
    pub track: u32,
}

impl Default for TagSpec<'_> {
    fn default() -> Self {
        Self {
            artist: "Anders",
            album_artist: "",
            album: "669",
            title: "Diamonds",
            track: 2,
        }
    }
}

/// Write an ID3v2-tagged MPEG file at `path`, creating parent directories.
pub fn write_mp3(path: &Path, spec: &TagSpec<'_>) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, mpeg_frames()).unwrap();

    let mut tag = Tag::new(TagType::Id3v2);
    if !spec.artist.is_empty() {
        tag.set_artist(spec.artist.to_string());
    }
    if !spec.album_artist.is_empty() {
        tag.insert_text(ItemKey::AlbumArtist, spec.album_artist.to_string());
    }
    if !spec.album.is_empty() {
        tag.set_album(spec.album.to_string());
    }
    if !spec.title.is_empty() {
        tag.set_title(spec.title.to_string());
    }
    if spec.track > 0 {
        tag.set_track(spec.track);
    }
    tag.save_to_path(path, WriteOptions::default()).unwrap();
}

/// Bytes of an ID3v2-tagged MPEG file.
pub fn mp3_bytes(spec: &TagSpec<'_>) -> Vec<u8> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fixture.mp3");
    write_mp3(&path, spec);
    std::fs::read(path).unwrap()
}

/// In-memory tree keyed by relative path.
///
/// `BTreeMap` ordering on paths is component-wise, which matches a
/// lexically sorted depth-first walk.
#[derive(Default)]
pub struct MemTree {
    files: Mutex<BTreeMap<PathBuf, Vec<u8>>>,
    /// Writes to this path fail with `PermissionDenied`.
    fail_write: Option<PathBuf>,
}

impl MemTree {
    pub fn with_files<I, P>(files: I) -> Self
    where
        I: IntoIterator<Item = (P, Vec<u8>)>,
        P: Into<PathBuf>,
    {
        Self {
            files: Mutex::new(files.into_iter().map(|(p, c)| (p.into(), c)).collect()),
            fail_write: None,
        }
    }

    /// An empty tree that refuses to write `path`.
    pub fn failing_on(path: impl Into<PathBuf>) -> Self {
        Self {
            fail_write: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn touch<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self::with_files(paths.into_iter().map(|p| (p, b"foo".to_vec())))
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.lock().unwrap().keys().cloned().collect()
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }
}

impl SourceTree for MemTree {
    fn walk(&self) -> io::Result<Vec<PathBuf>> {
        Ok(self.paths())
    }

    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.get(path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }
}

impl DestinationTree for MemTree {
    fn make_dir_all(&self, _path: &Path) -> io::Result<()> {
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        if self.fail_write.as_deref() == Some(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }
}
