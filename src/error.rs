use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

/// Axis on which a view span collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid canvas size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("arithmetic error: {0}")]
    Arithmetic(String),

    #[error("precision error: {0}")]
    Precision(String),

    #[error("degenerate view: {axis} span must be > 0")]
    DegenerateView { axis: Axis },

    #[error("pointer input outside canvas: x={x}, y={y}")]
    OutOfBoundsInput { x: f64, y: f64 },

    #[error("drawing surface error: {0}")]
    Surface(String),
}
