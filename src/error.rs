use std::io;
use std::path::PathBuf;

use crate::fetch::FetchError;

/// Everything that can end a goski run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode: {0}")]
    Decode(#[from] image::ImageError),

    #[error("glyph ramp needs at least 2 glyphs, got {len}")]
    InvalidRamp { len: usize },

    #[error("to use a remote resource, pass the `-r` flag")]
    RemoteNotAllowed,

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}
