use thiserror::Error;

/// Top-level error type for the squircle slider geometry crate.
#[derive(Debug, Error)]
pub enum SquircleError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Slider(#[from] SliderError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("segment {index} is not connected to the previous segment (gap {gap})")]
    Discontinuous { index: usize, gap: f64 },

    #[error("path is not closed")]
    NotClosed,
}

/// Errors related to SVG path data.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("unsupported path command '{0}'")]
    UnsupportedCommand(char),

    #[error("invalid number in path data: '{0}'")]
    InvalidNumber(String),

    #[error("path data ended while reading arguments for '{0}'")]
    UnexpectedEnd(char),

    #[error("drawing command before the initial move-to")]
    MissingMoveTo,

    #[error("path data contains more than one subpath")]
    MultipleSubpaths,

    #[error("path data contains no segments")]
    Empty,
}

/// Errors related to slider value mapping.
#[derive(Debug, Error)]
pub enum SliderError {
    #[error("invalid range: min {min} must be less than max {max}")]
    InvalidRange { min: f64, max: f64 },
}

/// Convenience type alias for results using [`SquircleError`].
pub type Result<T> = std::result::Result<T, SquircleError>;
