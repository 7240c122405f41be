//! Loading and pixel-format validation of the two input images.

use std::path::{Path, PathBuf};

use image::{ColorType, DynamicImage, RgbImage, RgbaImage};

use crate::error::{Error, FormatIssue, ImageRole, Result};

/// Accepted pixel layouts: three color components, 24 or 32 bits per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// 8-bit RGB, no alpha.
    Rgb24,
    /// 8-bit RGB with an 8-bit alpha channel.
    Rgba32,
}

impl PixelFormat {
    /// Classify a decoded color type.
    ///
    /// # Errors
    ///
    /// Returns the [`FormatIssue`] describing why the color type is rejected.
    pub fn classify(color: ColorType) -> std::result::Result<Self, FormatIssue> {
        let components = color.channel_count() - u8::from(color.has_alpha());
        if components != 3 {
            return Err(FormatIssue::ColorComponents(components));
        }
        match color.bits_per_pixel() {
            24 => Ok(Self::Rgb24),
            32 => Ok(Self::Rgba32),
            bits => Err(FormatIssue::BitDepth(bits)),
        }
    }

    /// Whether pixels carry an alpha channel.
    #[must_use]
    pub fn has_alpha(self) -> bool {
        matches!(self, Self::Rgba32)
    }

    /// Bits per pixel.
    #[must_use]
    pub fn bits(self) -> u16 {
        match self {
            Self::Rgb24 => 24,
            Self::Rgba32 => 32,
        }
    }
}

/// A decoded input image whose pixel format has been validated.
#[derive(Debug, Clone)]
pub struct SourceImage {
    path: PathBuf,
    image: DynamicImage,
    format: PixelFormat,
}

impl SourceImage {
    /// Open and validate an image file.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingFile`] if `path` does not exist.
    /// - [`Error::Decode`] if the file cannot be decoded.
    /// - [`Error::UnsupportedPixelFormat`] if the image is not 24/32-bit RGB(A).
    pub fn open(path: &Path, role: ImageRole) -> Result<Self> {
        if !path.exists() {
            return Err(Error::MissingFile(path.to_path_buf()));
        }
        let image = image::open(path).map_err(|source| Error::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_dynamic(path, image, role)
    }

    /// Validate an already decoded image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedPixelFormat`] if the image is not 24/32-bit RGB(A).
    pub fn from_dynamic(path: &Path, image: DynamicImage, role: ImageRole) -> Result<Self> {
        let format = PixelFormat::classify(image.color())
            .map_err(|issue| Error::UnsupportedPixelFormat { role, issue })?;
        log::debug!(
            "loaded {role} {}: {}x{}, {}-bit",
            path.display(),
            image.width(),
            image.height(),
            format.bits()
        );
        Ok(Self {
            path: path.to_path_buf(),
            image,
            format,
        })
    }

    /// Path the image was loaded from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Validated pixel format.
    #[must_use]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// `(width, height)` in pixels.
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }

    /// Pixels as RGB, dropping any alpha channel.
    #[must_use]
    pub fn to_rgb8(&self) -> RgbImage {
        self.image.to_rgb8()
    }

    /// Pixels as RGBA; images without alpha become fully opaque.
    #[must_use]
    pub fn to_rgba8(&self) -> RgbaImage {
        self.image.to_rgba8()
    }
}

/// Check that a watermark of size `watermark` fits inside a base of size `base`.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if the watermark is wider or taller.
pub fn ensure_fits(base: (u32, u32), watermark: (u32, u32)) -> Result<()> {
    if watermark.0 > base.0 || watermark.1 > base.1 {
        return Err(Error::DimensionMismatch { base, watermark });
    }
    Ok(())
}
