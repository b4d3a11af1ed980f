use crate::error::PlotResult;
use crate::render::{Color, DrawingSurface, FontSpec, LineCap, LineJoin, TextAlign};

/// Surface that draws nothing and only counts calls.
///
/// Used by tests and headless hosts to observe how much work a render pass did.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NullSurface {
    pub call_count: usize,
    pub path_count: usize,
    pub stroke_count: usize,
    pub fill_rect_count: usize,
    pub text_count: usize,
}

impl NullSurface {
    fn record(&mut self) -> PlotResult<()> {
        self.call_count += 1;
        Ok(())
    }
}

impl DrawingSurface for NullSurface {
    fn set_fill_color(&mut self, _color: Color) -> PlotResult<()> {
        self.record()
    }

    fn set_stroke_color(&mut self, _color: Color) -> PlotResult<()> {
        self.record()
    }

    fn set_line_width(&mut self, _width: f64) -> PlotResult<()> {
        self.record()
    }

    fn set_line_cap(&mut self, _cap: LineCap) -> PlotResult<()> {
        self.record()
    }

    fn set_line_join(&mut self, _join: LineJoin) -> PlotResult<()> {
        self.record()
    }

    fn begin_path(&mut self) -> PlotResult<()> {
        self.path_count += 1;
        self.record()
    }

    fn move_to(&mut self, _x: f64, _y: f64) -> PlotResult<()> {
        self.record()
    }

    fn line_to(&mut self, _x: f64, _y: f64) -> PlotResult<()> {
        self.record()
    }

    fn rect(&mut self, _x: f64, _y: f64, _width: f64, _height: f64) -> PlotResult<()> {
        self.record()
    }

    fn stroke(&mut self) -> PlotResult<()> {
        self.stroke_count += 1;
        self.record()
    }

    fn fill(&mut self) -> PlotResult<()> {
        self.record()
    }

    fn fill_rect(&mut self, _x: f64, _y: f64, _width: f64, _height: f64) -> PlotResult<()> {
        self.fill_rect_count += 1;
        self.record()
    }

    fn set_font(&mut self, _font: &FontSpec) -> PlotResult<()> {
        self.record()
    }

    fn set_text_align(&mut self, _align: TextAlign) -> PlotResult<()> {
        self.record()
    }

    fn fill_text(&mut self, _text: &str, _x: f64, _y: f64) -> PlotResult<()> {
        self.text_count += 1;
        self.record()
    }
}
