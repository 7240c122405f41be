//! Weighted watermark compositing.
//!
//! Each visible watermark pixel is mixed into the base image per channel:
//! `result = (weight * watermark + (100 - weight) * base) / 100`
//!
//! Visibility is decided by [`Masking`] and which base pixels are touched by
//! [`Placement`]. The alpha channel only gates visibility, it never scales the
//! blend weight.

use image::{Rgb, RgbImage, Rgba, RgbaImage};

use crate::error::{Error, Result};

/// Upper bound of the blend weight percentage.
pub const MAX_WEIGHT: u8 = 100;

/// The watermark's contribution in percent, always within `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Weight(u8);

impl Weight {
    /// Create a weight, rejecting values above 100.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWeight`] if `percent > 100`.
    pub fn new(percent: u8) -> Result<Self> {
        if percent > MAX_WEIGHT {
            return Err(Error::InvalidWeight {
                input: percent.to_string(),
                reason: "out of range",
            });
        }
        Ok(Self(percent))
    }

    /// The weight as a percentage.
    #[must_use]
    pub fn percent(self) -> u8 {
        self.0
    }

    /// Mix a watermark pixel into a base pixel with truncating integer division.
    #[must_use]
    pub fn mix(self, mark: Rgba<u8>, base: Rgb<u8>) -> Rgb<u8> {
        let w = u16::from(self.0);
        let inv = u16::from(MAX_WEIGHT) - w;
        let mut out = base;
        for ch in 0..3 {
            let mixed = (w * u16::from(mark[ch]) + inv * u16::from(base[ch])) / 100;
            // mixed <= 255 since both inputs are u8 and the weights sum to 100
            #[allow(clippy::cast_possible_truncation)]
            {
                out[ch] = mixed as u8;
            }
        }
        out
    }
}

/// How watermark pixels are masked out before blending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Masking {
    /// Every watermark pixel is drawn.
    #[default]
    None,
    /// Only pixels with a non-zero alpha channel are drawn.
    Alpha,
    /// Pixels whose RGB equals this key color are skipped.
    Color(Rgb<u8>),
}

impl Masking {
    /// Whether a watermark pixel should be drawn.
    #[must_use]
    pub fn is_visible(&self, mark: &Rgba<u8>) -> bool {
        match self {
            Self::None => true,
            Self::Alpha => mark[3] > 0,
            Self::Color(key) => mark.0[..3] != key.0,
        }
    }
}

/// Top-left offset of a single-placed watermark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Horizontal offset in base-image pixels.
    pub x: u32,
    /// Vertical offset in base-image pixels.
    pub y: u32,
}

/// Where the watermark is drawn on the base image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Drawn once with its top-left corner at the given position.
    Single(Position),
    /// Tiled across the whole base image starting at `(0, 0)`.
    Grid,
}

/// Extent of the footprint used by [`Placement::Single`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeMode {
    /// The footprint is exactly the watermark's `width x height`.
    #[default]
    Exclusive,
    /// Legacy footprint: one extra column and row past the right and bottom
    /// edges, filled by wrapping back to the watermark's first column and row.
    Inclusive,
}

impl Placement {
    /// Map a base-image coordinate to a watermark coordinate.
    ///
    /// Returns `None` when the base pixel lies outside the footprint or the
    /// watermark is empty.
    #[must_use]
    pub fn locate(self, x: u32, y: u32, wm_w: u32, wm_h: u32, edge: EdgeMode) -> Option<(u32, u32)> {
        if wm_w == 0 || wm_h == 0 {
            return None;
        }
        match self {
            Self::Grid => Some((x % wm_w, y % wm_h)),
            Self::Single(origin) => {
                let dx = x.checked_sub(origin.x)?;
                let dy = y.checked_sub(origin.y)?;
                let inside = match edge {
                    EdgeMode::Exclusive => dx < wm_w && dy < wm_h,
                    EdgeMode::Inclusive => dx <= wm_w && dy <= wm_h,
                };
                inside.then_some((dx % wm_w, dy % wm_h))
            }
        }
    }
}

/// Everything that controls one blend pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlendConfig {
    /// Watermark contribution in percent.
    pub weight: Weight,
    /// Which watermark pixels are drawn.
    pub masking: Masking,
    /// Where the watermark goes.
    pub placement: Placement,
    /// Footprint extent for single placement.
    pub edge: EdgeMode,
}

/// Blend `watermark` onto a copy of `base`.
///
/// The base image is left untouched; pixels outside the placement footprint and
/// masked-out watermark pixels pass through unchanged. The caller is
/// responsible for the watermark fitting inside the base (see
/// [`crate::source::ensure_fits`]).
#[must_use]
pub fn blend(base: &RgbImage, watermark: &RgbaImage, config: &BlendConfig) -> RgbImage {
    let mut output = base.clone();
    let (wm_w, wm_h) = watermark.dimensions();
    if wm_w == 0 || wm_h == 0 {
        return output;
    }

    let mut composited = 0u64;
    for (x, y, px) in output.enumerate_pixels_mut() {
        let Some((wx, wy)) = config.placement.locate(x, y, wm_w, wm_h, config.edge) else {
            continue;
        };
        let mark = watermark.get_pixel(wx, wy);
        if config.masking.is_visible(mark) {
            *px = config.weight.mix(*mark, *px);
            composited += 1;
        }
    }

    log::debug!(
        "composited {composited} pixels at {}% weight ({:?}, {:?})",
        config.weight.percent(),
        config.placement,
        config.masking
    );
    output
}
