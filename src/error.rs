use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while producing round icons.
#[derive(Debug, Error)]
pub enum IconError {
    /// The source image is not a regular file. Checked once, before any work.
    #[error("source image {} not found", path.display())]
    MissingSource { path: PathBuf },

    /// The source exists but could not be read as an image.
    #[error("failed to decode {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Creating an output directory or writing an output file failed.
    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode PNG {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("icon size for {density} must be positive")]
    InvalidSize { density: String },
}

impl IconError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IconError::Io {
            path: path.into(),
            source,
        }
    }
}
