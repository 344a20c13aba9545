pub mod error;
pub mod geometry;
pub mod math;
pub mod sampling;
pub mod slider;

pub use error::{Result, SquircleError};
pub use geometry::{CubicBezier, Path, PathSegment, PieSector, SvgCommand};
pub use sampling::{ArcLengthTable, SamplingParams};
pub use slider::{PathGeometry, SliderRange, SliderTrack};
