pub mod cubic;
pub mod path;
pub mod pie;
pub mod squircle;
pub mod svg;

pub use cubic::CubicBezier;
pub use path::{Path, PathSegment};
pub use pie::PieSector;
pub use svg::SvgCommand;
