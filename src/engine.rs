//! A fully validated blend job and its execution.

use std::path::{Path, PathBuf};

use image::{RgbImage, RgbaImage};

use crate::blending::{self, BlendConfig};
use crate::error::Result;
use crate::sink::{self, OutputFormat};

/// Everything needed to produce one watermarked file.
///
/// Built by [`crate::prompt::gather_job`] once every input has passed
/// validation, so running it can only fail on encoding or writing.
#[derive(Debug, Clone)]
pub struct BlendJob {
    base: RgbImage,
    watermark: RgbaImage,
    config: BlendConfig,
    output: PathBuf,
    format: OutputFormat,
}

impl BlendJob {
    /// Assemble a job from already validated parts.
    #[must_use]
    pub fn new(
        base: RgbImage,
        watermark: RgbaImage,
        config: BlendConfig,
        output: PathBuf,
        format: OutputFormat,
    ) -> Self {
        Self {
            base,
            watermark,
            config,
            output,
            format,
        }
    }

    /// The blend parameters.
    #[must_use]
    pub fn config(&self) -> &BlendConfig {
        &self.config
    }

    /// Where the result will be written.
    #[must_use]
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Blend without writing anything.
    #[must_use]
    pub fn render(&self) -> RgbImage {
        blending::blend(&self.base, &self.watermark, &self.config)
    }

    /// Blend and write the result, returning the output path.
    ///
    /// # Errors
    ///
    /// Returns an error if the output file cannot be created or encoded.
    pub fn run(&self) -> Result<&Path> {
        let blended = self.render();
        sink::save_image(&blended, &self.output, self.format)?;
        Ok(&self.output)
    }
}
