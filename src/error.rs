//! Error types for the watermark-blend crate.

use std::fmt;
use std::path::PathBuf;

/// Which of the two input images an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRole {
    /// The image the watermark is blended onto.
    Base,
    /// The watermark itself.
    Watermark,
}

impl fmt::Display for ImageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => f.write_str("image"),
            Self::Watermark => f.write_str("watermark"),
        }
    }
}

/// Why a decoded image's pixel layout was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatIssue {
    /// The image does not have exactly three color components.
    ColorComponents(u8),
    /// The image is not 24 or 32 bits per pixel.
    BitDepth(u16),
}

impl fmt::Display for FormatIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColorComponents(n) => write!(f, "has {n} color components, expected 3"),
            Self::BitDepth(bits) => write!(f, "is {bits}-bit, expected 24 or 32-bit"),
        }
    }
}

/// Errors that can occur while validating inputs and producing the output image.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A referenced image path does not exist.
    #[error("the file {} doesn't exist", .0.display())]
    MissingFile(PathBuf),

    /// The file exists but could not be decoded as an image.
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        /// Path of the undecodable file.
        path: PathBuf,
        /// Underlying codec error.
        source: image::ImageError,
    },

    /// The image has the wrong number of color components or bit depth.
    #[error("the {role} {issue}")]
    UnsupportedPixelFormat {
        /// Which input was rejected.
        role: ImageRole,
        /// What was wrong with it.
        issue: FormatIssue,
    },

    /// The watermark is larger than the base image in at least one axis.
    #[error(
        "the watermark's dimensions ({}x{}) are larger than the image ({}x{})",
        .watermark.0, .watermark.1, .base.0, .base.1
    )]
    DimensionMismatch {
        /// Base image `(width, height)`.
        base: (u32, u32),
        /// Watermark `(width, height)`.
        watermark: (u32, u32),
    },

    /// The blend weight is not an integer in `[0, 100]`.
    #[error("the transparency percentage {input:?} is {reason}")]
    InvalidWeight {
        /// Raw user input.
        input: String,
        /// Short description of the problem.
        reason: &'static str,
    },

    /// The transparency color is not three integers in `[0, 255]`.
    #[error("the transparency color input {0:?} is invalid")]
    InvalidTransparencyColor(String),

    /// The placement token is neither `single` nor `grid`.
    #[error("the position method input {0:?} is invalid")]
    InvalidPlacementMethod(String),

    /// The position pair is malformed or does not keep the watermark inside the image.
    #[error("the position input {input:?} is {reason}")]
    InvalidPosition {
        /// Raw user input.
        input: String,
        /// Short description of the problem.
        reason: &'static str,
    },

    /// The output file extension is not `jpg` or `png`.
    #[error("the output file extension of {0:?} isn't \"jpg\" or \"png\"")]
    UnsupportedOutputFormat(String),

    /// An I/O error occurred while prompting or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error occurred while encoding the output image.
    #[error("image processing error: {0}")]
    Image(#[from] image::ImageError),
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
