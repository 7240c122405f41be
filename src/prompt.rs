//! Interactive question-and-answer flow that assembles a [`BlendJob`].
//!
//! Questions are written to any [`Write`] and answers read line by line from
//! any [`BufRead`], so the same flow drives a terminal or a scripted test.
//! Answers already present in [`JobOptions`] are validated the same way but
//! their questions are not asked.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::blending::{BlendConfig, EdgeMode, Masking, Position};
use crate::engine::BlendJob;
use crate::error::{Error, ImageRole, Result};
use crate::source::{ensure_fits, SourceImage};
use crate::validate::{self, PlacementMethod};

/// Pre-supplied answers, typically from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct JobOptions {
    /// Base image path.
    pub image: Option<PathBuf>,
    /// Watermark image path.
    pub watermark: Option<PathBuf>,
    /// Whether to gate on the watermark's alpha channel.
    pub use_alpha: Option<bool>,
    /// Transparency color as `R G B`, or `none` to disable it.
    pub transparency_color: Option<String>,
    /// Blend weight, as typed.
    pub weight: Option<String>,
    /// Placement token (`single` or `grid`).
    pub placement: Option<String>,
    /// Position as `X Y`.
    pub position: Option<String>,
    /// Output path.
    pub output: Option<PathBuf>,
    /// Footprint extent for single placement.
    pub edge: EdgeMode,
}

/// Line-oriented prompt over a reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Wrap an input and output stream.
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` and read one answer line without its line terminator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] on write/read failure or when input ends.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        writeln!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                format!("input ended while waiting for: {question}"),
            )));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Use the preset answer if there is one, otherwise ask.
    fn answer(&mut self, preset: Option<&str>, question: &str) -> Result<String> {
        match preset {
            Some(value) => Ok(value.to_string()),
            None => self.ask(question),
        }
    }

    /// Consume the prompter, returning the output stream.
    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Run the full flow: load both images, settle masking, weight, placement and
/// output path. Stops at the first invalid answer.
///
/// # Errors
///
/// Returns the first validation or I/O error encountered.
pub fn gather_job<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    opts: &JobOptions,
) -> Result<BlendJob> {
    let image_path = match &opts.image {
        Some(p) => p.clone(),
        None => PathBuf::from(prompter.ask("Input the image filename:")?),
    };
    let base = SourceImage::open(&image_path, ImageRole::Base)?;

    let watermark_path = match &opts.watermark {
        Some(p) => p.clone(),
        None => PathBuf::from(prompter.ask("Input the watermark image filename:")?),
    };
    let watermark = SourceImage::open(&watermark_path, ImageRole::Watermark)?;
    ensure_fits(base.dimensions(), watermark.dimensions())?;

    let masking = gather_masking(prompter, opts, &watermark)?;

    let weight = validate::parse_weight(&prompter.answer(
        opts.weight.as_deref(),
        "Input the watermark transparency percentage (Integer 0-100):",
    )?)?;

    let method = validate::parse_placement_method(&prompter.answer(
        opts.placement.as_deref(),
        "Choose the position method (single, grid):",
    )?)?;

    let position = match method {
        PlacementMethod::Single => {
            let max = validate::max_position(base.dimensions(), watermark.dimensions());
            let question = format!(
                "Input the watermark position ([x 0-{}] [y 0-{}]):",
                max.x, max.y
            );
            validate::parse_position(&prompter.answer(opts.position.as_deref(), &question)?, max)?
        }
        PlacementMethod::Grid => {
            if opts.position.is_some() {
                log::warn!("--position is ignored for grid placement");
            }
            Position::default()
        }
    };

    let output = match &opts.output {
        Some(p) => p.clone(),
        None => PathBuf::from(prompter.ask("Input the output image filename (jpg or png extension):")?),
    };
    let format = validate::parse_output_path(&output)?;

    let config = BlendConfig {
        weight,
        masking,
        placement: method.with_position(position),
        edge: opts.edge,
    };
    log::debug!("blend config: {config:?}");

    Ok(BlendJob::new(
        base.to_rgb8(),
        watermark.to_rgba8(),
        config,
        output,
        format,
    ))
}

/// Alpha gating is only offered for watermarks with an alpha channel; the
/// others may pick a transparency color instead.
fn gather_masking<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    opts: &JobOptions,
    watermark: &SourceImage,
) -> Result<Masking> {
    if watermark.format().has_alpha() {
        if opts.transparency_color.is_some() {
            log::warn!("--transparency-color is ignored for a watermark with an alpha channel");
        }
        let use_alpha = match opts.use_alpha {
            Some(v) => v,
            None => validate::parse_yes(
                &prompter.ask("Do you want to use the watermark's Alpha channel?")?,
            ),
        };
        return Ok(if use_alpha { Masking::Alpha } else { Masking::None });
    }

    if opts.use_alpha == Some(true) {
        log::warn!(
            "{} has no alpha channel, --use-alpha is ignored",
            watermark.path().display()
        );
    }

    let color = match opts.transparency_color.as_deref() {
        Some(v) if v.trim().eq_ignore_ascii_case("none") => None,
        Some(v) => Some(validate::parse_transparency_color(v)?),
        None => {
            if validate::parse_yes(&prompter.ask("Do you want to set a transparency color?")?) {
                let answer = prompter.ask("Input a transparency color ([Red] [Green] [Blue]):")?;
                Some(validate::parse_transparency_color(&answer)?)
            } else {
                None
            }
        }
    };
    Ok(color.map_or(Masking::None, Masking::Color))
}
