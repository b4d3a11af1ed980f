mod null_surface;
mod primitives;
mod recording_surface;

pub use null_surface::NullSurface;
pub use primitives::{Color, FontSpec, LineCap, LineJoin, LineStyle, TextAlign, TextStyle};
pub use recording_surface::{DrawCommand, RecordingSurface};

use crate::error::PlotResult;

/// Immediate-mode 2D drawing surface the plot paints onto.
///
/// Implementations wrap a host canvas context. Coordinates are canvas pixels
/// with the origin at the top-left. Every call may fail; the plot stops the
/// pass at the first error and keeps its dirty state.
pub trait DrawingSurface {
    fn set_fill_color(&mut self, color: Color) -> PlotResult<()>;
    fn set_stroke_color(&mut self, color: Color) -> PlotResult<()>;
    fn set_line_width(&mut self, width: f64) -> PlotResult<()>;
    fn set_line_cap(&mut self, cap: LineCap) -> PlotResult<()>;
    fn set_line_join(&mut self, join: LineJoin) -> PlotResult<()>;

    fn begin_path(&mut self) -> PlotResult<()>;
    fn move_to(&mut self, x: f64, y: f64) -> PlotResult<()>;
    fn line_to(&mut self, x: f64, y: f64) -> PlotResult<()>;
    /// Adds a closed rectangle sub-path with its top-left corner at `(x, y)`.
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> PlotResult<()>;
    fn stroke(&mut self) -> PlotResult<()>;
    fn fill(&mut self) -> PlotResult<()>;
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> PlotResult<()>;

    fn set_font(&mut self, font: &FontSpec) -> PlotResult<()>;
    fn set_text_align(&mut self, align: TextAlign) -> PlotResult<()>;
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> PlotResult<()>;

    /// Applies every field of a line style.
    fn apply_line_style(&mut self, style: LineStyle) -> PlotResult<()> {
        self.set_stroke_color(style.color)?;
        self.set_line_width(style.width)?;
        self.set_line_cap(style.cap)?;
        self.set_line_join(style.join)
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::CairoSurface;
