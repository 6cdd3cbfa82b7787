use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tuneshelf", version, about = "Move and rename music")]
pub struct Cli {
    /// Directories to organize, processed in the given order
    #[arg(value_name = "INPUT_DIR", required = true)]
    pub inputs: Vec<PathBuf>,

    /// The root of the output directory
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Comma separated list of file extensions to process, dot included
    #[arg(short, long, value_delimiter = ',')]
    pub extensions: Option<Vec<String>>,

    /// Force file artist, disregarding file metadata
    #[arg(short, long)]
    pub artist: Option<String>,

    /// Force file album, disregarding file metadata
    #[arg(short = 'b', long)]
    pub album: Option<String>,

    /// Force the album artist written into the copied files
    #[arg(long)]
    pub album_artist: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}
