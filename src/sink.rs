//! Encoding the blended image to disk.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ImageFormat, RgbImage};

use crate::error::Result;

/// JPEG quality used for lossy output.
pub const JPEG_QUALITY: u8 = 100;

/// Supported output encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Lossy JPEG (`.jpg`).
    Jpeg,
    /// Lossless PNG (`.png`).
    Png,
}

impl OutputFormat {
    /// Match a file extension, case-insensitively.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "jpg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            _ => None,
        }
    }

    /// The `image` crate format this maps to.
    #[must_use]
    pub fn image_format(self) -> ImageFormat {
        match self {
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Png => ImageFormat::Png,
        }
    }
}

/// Save an RGB image with format-specific quality settings.
///
/// Missing parent directories are created first. If encoding or flushing
/// fails, a file created by this call is removed again.
///
/// # Errors
///
/// Returns an error if creating, encoding or flushing the file fails.
pub fn save_image(img: &RgbImage, path: &Path, format: OutputFormat) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let existed = path.exists();
    if let Err(e) = write_encoded(img, path, format) {
        if !existed && path.exists() {
            if let Err(rm) = std::fs::remove_file(path) {
                log::warn!("failed to remove partial output {}: {rm}", path.display());
            }
        }
        return Err(e);
    }

    log::info!("wrote {} ({format:?})", path.display());
    Ok(())
}

fn write_encoded(img: &RgbImage, path: &Path, format: OutputFormat) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    match format {
        OutputFormat::Jpeg => {
            let mut encoder = JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY);
            encoder.encode_image(img)?;
        }
        OutputFormat::Png => {
            img.write_with_encoder(PngEncoder::new(&mut writer))?;
        }
    }
    writer.flush()?;
    Ok(())
}
