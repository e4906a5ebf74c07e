use std::path::{Path, PathBuf};

use thiserror::Error;

use super::frame::Frame;

#[derive(Error, Debug)]
pub enum ImageIoError {
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to create output directory: {0}")]
    OutputDir(#[source] std::io::Error),
    #[error("frame buffer does not match {width}x{height}")]
    BufferSize { width: u32, height: u32 },
}

/// Decodes an image file into an RGB frame with index 0.
pub fn read_frame(path: &Path) -> Result<Frame, ImageIoError> {
    let img = image::open(path)
        .map_err(|source| ImageIoError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgb8();
    let (width, height) = img.dimensions();
    Ok(Frame::new(img.into_raw(), width, height, 0))
}

/// Encodes a frame; the format follows the file extension.
pub fn write_frame(path: &Path, frame: &Frame) -> Result<(), ImageIoError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(ImageIoError::OutputDir)?;
    }

    let img = image::RgbImage::from_raw(frame.width(), frame.height(), frame.data().to_vec())
        .ok_or(ImageIoError::BufferSize {
            width: frame.width(),
            height: frame.height(),
        })?;

    img.save(path).map_err(|source| ImageIoError::Encode {
        path: path.to_path_buf(),
        source,
    })
}
