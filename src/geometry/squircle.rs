use crate::error::{GeometryError, Result};
use crate::math::TOLERANCE;

use super::path::Path;
use super::svg::{commands_to_path, parse_path_data};

/// SVG path data for the squircle outline.
///
/// The outline starts at the bottom of the shape and is made of four
/// cubic segments over a reference box of width 277 and height 281.
/// These exact constants are load-bearing: existing renderings depend on
/// this outline's proportions.
pub const SQUIRCLE_PATH_DATA: &str = "M138.497 281C88.1916 281 0.474609 191.77 0.474609 140.595C0.474609 89.4194 88.1916 0.189697 138.497 0.189697C188.808 0.189697 276.525 89.4194 276.525 140.595C276.525 191.77 188.808 281 138.497 281Z";

/// Width of the reference bounding box of [`SQUIRCLE_PATH_DATA`].
pub const REFERENCE_WIDTH: f64 = 277.0;

/// Height of the reference bounding box of [`SQUIRCLE_PATH_DATA`].
pub const REFERENCE_HEIGHT: f64 = 281.0;

/// Parses the squircle outline in its reference coordinates.
///
/// # Errors
///
/// Returns an error if the embedded path data fails to parse; this does
/// not happen for the shipped constant.
pub fn squircle_path() -> Result<Path> {
    commands_to_path(&parse_path_data(SQUIRCLE_PATH_DATA)?)
}

/// Returns the squircle outline scaled into a `2·radius × 2·radius` box.
///
/// The two axes are scaled independently, so the reference box's slight
/// height excess (281 vs 277) is preserved in the output.
///
/// # Errors
///
/// Returns an error if `radius` is not a positive finite number.
pub fn squircle_outline(radius: f64) -> Result<Path> {
    if !radius.is_finite() || radius < TOLERANCE {
        return Err(
            GeometryError::Degenerate("squircle radius must be positive".into()).into(),
        );
    }
    let path = squircle_path()?;
    Ok(path.scaled(
        (radius * 2.0) / REFERENCE_WIDTH,
        (radius * 2.0) / REFERENCE_HEIGHT,
    ))
}
