pub mod navigation;
pub mod numeric;
pub mod plot_area;
pub mod series;
pub mod transform;
pub mod types;

pub use navigation::{
    NavigationConfig, pan_area, rescale_bounds, resolve_zoom_step, span_digits, zoom_area,
};
pub use numeric::{
    DecimalBackend, DivisionPrecision, FloatBackend, MAX_DECIMAL_SCALE, NumericBackend,
    RoundingMode,
};
pub use plot_area::PlotArea;
pub use series::{CoordinateSpace, Series, SeriesKind};
pub use transform::{PrecisionConfig, ViewTransform};
pub use types::{Canvas, DataPoint, ScreenPoint};
