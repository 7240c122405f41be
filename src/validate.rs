//! Parsers for the textual answers that configure a blend.
//!
//! Each parser takes one line of user input and either returns a typed value or
//! the matching [`Error`] variant. Nothing here touches the file system.

use std::path::Path;

use image::Rgb;

use crate::blending::{Placement, Position, Weight};
use crate::error::{Error, Result};
use crate::sink::OutputFormat;

/// Placement method chosen before a position is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementMethod {
    /// A single watermark at a user-supplied position.
    Single,
    /// The watermark tiled over the whole image.
    Grid,
}

impl PlacementMethod {
    /// Complete the method into a [`Placement`]; the position is ignored for grids.
    #[must_use]
    pub fn with_position(self, position: Position) -> Placement {
        match self {
            Self::Single => Placement::Single(position),
            Self::Grid => Placement::Grid,
        }
    }
}

/// Interpret a yes/no answer; anything other than `yes` or `y` means no.
#[must_use]
pub fn parse_yes(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "yes" | "y")
}

/// Parse a blend weight in `[0, 100]`.
///
/// # Errors
///
/// Returns [`Error::InvalidWeight`] for non-integers and out-of-range values.
pub fn parse_weight(input: &str) -> Result<Weight> {
    let value: i64 = input.trim().parse().map_err(|_| Error::InvalidWeight {
        input: input.to_string(),
        reason: "not an integer",
    })?;
    u8::try_from(value)
        .ok()
        .and_then(|v| Weight::new(v).ok())
        .ok_or_else(|| Error::InvalidWeight {
            input: input.to_string(),
            reason: "out of range",
        })
}

/// Parse a transparency color written as `R G B`, each in `[0, 255]`.
///
/// # Errors
///
/// Returns [`Error::InvalidTransparencyColor`] unless there are exactly three
/// integers in range.
pub fn parse_transparency_color(input: &str) -> Result<Rgb<u8>> {
    let invalid = || Error::InvalidTransparencyColor(input.to_string());
    let values = input
        .split_whitespace()
        .map(str::parse::<u8>)
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|_| invalid())?;
    match values.as_slice() {
        &[r, g, b] => Ok(Rgb([r, g, b])),
        _ => Err(invalid()),
    }
}

/// Parse a placement method token, case-insensitively.
///
/// # Errors
///
/// Returns [`Error::InvalidPlacementMethod`] for anything but `single` or `grid`.
pub fn parse_placement_method(input: &str) -> Result<PlacementMethod> {
    match input.trim().to_lowercase().as_str() {
        "single" => Ok(PlacementMethod::Single),
        "grid" => Ok(PlacementMethod::Grid),
        _ => Err(Error::InvalidPlacementMethod(input.to_string())),
    }
}

/// Largest valid single-placement offset for a watermark inside a base image.
///
/// Assumes the watermark fits (see [`crate::source::ensure_fits`]).
#[must_use]
pub fn max_position(base: (u32, u32), watermark: (u32, u32)) -> Position {
    Position {
        x: base.0.saturating_sub(watermark.0),
        y: base.1.saturating_sub(watermark.1),
    }
}

/// Parse an `X Y` position and check that it lies within `[0, max]` on both axes.
///
/// # Errors
///
/// Returns [`Error::InvalidPosition`] when the input is not two integers, or when
/// either coordinate is out of range.
pub fn parse_position(input: &str, max: Position) -> Result<Position> {
    let malformed = || Error::InvalidPosition {
        input: input.to_string(),
        reason: "invalid",
    };
    let values = input
        .split_whitespace()
        .map(str::parse::<i64>)
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|_| malformed())?;
    let &[x, y] = values.as_slice() else {
        return Err(malformed());
    };

    let in_range = |v: i64, limit: u32| u32::try_from(v).ok().filter(|v| *v <= limit);
    match (in_range(x, max.x), in_range(y, max.y)) {
        (Some(x), Some(y)) => Ok(Position { x, y }),
        _ => Err(Error::InvalidPosition {
            input: input.to_string(),
            reason: "out of range",
        }),
    }
}

/// Check the output path's extension and pick the encoder.
///
/// # Errors
///
/// Returns [`Error::UnsupportedOutputFormat`] unless the extension is `jpg` or `png`.
pub fn parse_output_path(path: &Path) -> Result<OutputFormat> {
    path.extension()
        .and_then(|e| e.to_str())
        .and_then(OutputFormat::from_extension)
        .ok_or_else(|| Error::UnsupportedOutputFormat(path.display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_accepts_range_bounds() {
        assert_eq!(parse_weight("0").unwrap().percent(), 0);
        assert_eq!(parse_weight("100").unwrap().percent(), 100);
        assert_eq!(parse_weight(" 42 ").unwrap().percent(), 42);
    }

    #[test]
    fn weight_rejects_out_of_range_and_garbage() {
        for (input, reason) in [
            ("-1", "out of range"),
            ("101", "out of range"),
            ("99999999999", "out of range"),
            ("abc", "not an integer"),
            ("4.5", "not an integer"),
            ("", "not an integer"),
        ] {
            match parse_weight(input) {
                Err(Error::InvalidWeight { reason: r, .. }) => assert_eq!(r, reason, "{input}"),
                other => panic!("{input:?} gave {other:?}"),
            }
        }
    }

    #[test]
    fn yes_answers() {
        assert!(parse_yes("yes"));
        assert!(parse_yes("YES"));
        assert!(parse_yes("y"));
        assert!(!parse_yes("no"));
        assert!(!parse_yes(""));
        assert!(!parse_yes("yess"));
    }

    #[test]
    fn transparency_color_parses_rgb_triple() {
        assert_eq!(parse_transparency_color("0 255 12").unwrap(), Rgb([0, 255, 12]));
    }

    #[test]
    fn transparency_color_rejects_bad_input() {
        for input in ["", "1 2", "1 2 3 4", "256 0 0", "-1 0 0", "a b c"] {
            assert!(
                matches!(
                    parse_transparency_color(input),
                    Err(Error::InvalidTransparencyColor(_))
                ),
                "{input:?}"
            );
        }
    }

    #[test]
    fn placement_method_is_case_insensitive() {
        assert_eq!(parse_placement_method("single").unwrap(), PlacementMethod::Single);
        assert_eq!(parse_placement_method("GRID").unwrap(), PlacementMethod::Grid);
        assert!(matches!(
            parse_placement_method("tiled"),
            Err(Error::InvalidPlacementMethod(_))
        ));
    }

    #[test]
    fn position_bounds_follow_the_fit() {
        let max = max_position((10, 8), (3, 2));
        assert_eq!(max, Position { x: 7, y: 6 });
        assert_eq!(parse_position("7 6", max).unwrap(), Position { x: 7, y: 6 });
        assert_eq!(parse_position("0 0", max).unwrap(), Position { x: 0, y: 0 });
    }

    #[test]
    fn position_rejects_one_past_the_edge() {
        let max = max_position((10, 8), (3, 2));
        match parse_position("8 0", max) {
            Err(Error::InvalidPosition { reason, .. }) => assert_eq!(reason, "out of range"),
            other => panic!("unexpected {other:?}"),
        }
        assert!(parse_position("0 -1", max).is_err());
    }

    #[test]
    fn position_rejects_malformed_input() {
        let max = Position { x: 5, y: 5 };
        for input in ["", "1", "1 2 3", "x y", "1.0 2"] {
            match parse_position(input, max) {
                Err(Error::InvalidPosition { reason, .. }) => assert_eq!(reason, "invalid"),
                other => panic!("{input:?} gave {other:?}"),
            }
        }
    }

    #[test]
    fn grid_ignores_position() {
        let p = Position { x: 3, y: 4 };
        assert_eq!(PlacementMethod::Grid.with_position(p), Placement::Grid);
        assert_eq!(PlacementMethod::Single.with_position(p), Placement::Single(p));
    }

    #[test]
    fn output_path_extensions() {
        assert_eq!(parse_output_path(Path::new("out.jpg")).unwrap(), OutputFormat::Jpeg);
        assert_eq!(parse_output_path(Path::new("out.PNG")).unwrap(), OutputFormat::Png);
        for bad in ["out.gif", "out.jpeg", "out", ""] {
            assert!(
                matches!(
                    parse_output_path(Path::new(bad)),
                    Err(Error::UnsupportedOutputFormat(_))
                ),
                "{bad:?}"
            );
        }
    }
}
