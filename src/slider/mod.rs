pub mod geometry;
pub mod range;
pub mod track;

pub use geometry::PathGeometry;
pub use range::SliderRange;
pub use track::SliderTrack;
