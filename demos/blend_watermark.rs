//! Tile a watermark over an image at 30% weight, keying out pure white.
//!
//! Usage:
//! ```sh
//! cargo run --example blend_watermark -- base.png mark.png output.png
//! ```

use std::env;
use std::path::Path;
use std::process;

use image::Rgb;
use watermark_blend::blending::{BlendConfig, EdgeMode, Masking, Placement, Weight};
use watermark_blend::error::ImageRole;
use watermark_blend::sink::save_image;
use watermark_blend::source::{ensure_fits, SourceImage};
use watermark_blend::validate::parse_output_path;

fn run(base: &Path, mark: &Path, output: &Path) -> watermark_blend::Result<()> {
    let base = SourceImage::open(base, ImageRole::Base)?;
    let mark = SourceImage::open(mark, ImageRole::Watermark)?;
    ensure_fits(base.dimensions(), mark.dimensions())?;
    let format = parse_output_path(output)?;

    let config = BlendConfig {
        weight: Weight::new(30)?,
        masking: Masking::Color(Rgb([255, 255, 255])),
        placement: Placement::Grid,
        edge: EdgeMode::Exclusive,
    };
    let blended = watermark_blend::blending::blend(&base.to_rgb8(), &mark.to_rgba8(), &config);
    save_image(&blended, output, format)
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        eprintln!("Usage: {} <base> <watermark> <output>", args[0]);
        process::exit(1);
    }

    match run(args[1].as_ref(), args[2].as_ref(), args[3].as_ref()) {
        Ok(()) => println!("Done: {}", args[3]),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
