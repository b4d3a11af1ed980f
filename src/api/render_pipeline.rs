use tracing::{trace, warn};

use crate::core::{
    CoordinateSpace, DataPoint, NumericBackend, ScreenPoint, Series, SeriesKind, ViewTransform,
};
use crate::error::PlotResult;
use crate::render::{Color, DrawingSurface, TextStyle};

use super::Plot;

const POINT_FALLBACK_COLOR: Color = Color::WHITE;
const TEXT_FALLBACK_COLOR: Color = Color::BLACK;

impl<S: DrawingSurface, B: NumericBackend> Plot<S, B> {
    /// Paints the background and every series in insertion order.
    ///
    /// Does nothing unless the plot changed or a redraw was requested, and
    /// returns whether a pass ran. A failing drawing call aborts the pass and
    /// keeps the dirty flags set, so the next call repaints from scratch.
    pub fn render(&mut self) -> PlotResult<bool> {
        if !self.needs_render() {
            return Ok(false);
        }
        if let Err(err) = self.render_pass() {
            warn!(error = %err, "render pass failed; plot stays dirty");
            return Err(err);
        }
        self.changed = false;
        self.redraw = false;
        trace!(series = self.series.len(), "render pass complete");
        Ok(true)
    }

    fn render_pass(&mut self) -> PlotResult<()> {
        let canvas = self.transform.canvas();
        let painter = SeriesPainter {
            backend: &self.backend,
            transform: &self.transform,
        };
        let surface = &mut self.surface;

        surface.set_fill_color(self.background)?;
        surface.set_stroke_color(self.background)?;
        surface.fill_rect(0.0, 0.0, f64::from(canvas.width), f64::from(canvas.height))?;

        for series in self.series.values() {
            painter.paint(surface, series)?;
        }
        Ok(())
    }
}

struct SeriesPainter<'a, B: NumericBackend> {
    backend: &'a B,
    transform: &'a ViewTransform<B::Value>,
}

impl<B: NumericBackend> SeriesPainter<'_, B> {
    fn paint<S: DrawingSurface>(
        &self,
        surface: &mut S,
        series: &Series<B::Value>,
    ) -> PlotResult<()> {
        match series.kind() {
            SeriesKind::Lines => self.paint_lines(surface, series),
            SeriesKind::Points => self.paint_points(surface, series),
            SeriesKind::Rectangles { width, height } => {
                self.paint_rectangles(surface, series, *width, *height)
            }
            SeriesKind::Text { text, style } => self.paint_text(surface, series, text, style),
        }
    }

    fn project(
        &self,
        space: CoordinateSpace,
        point: DataPoint<B::Value>,
    ) -> PlotResult<ScreenPoint> {
        match space {
            CoordinateSpace::Data => self.transform.to_screen_coords(self.backend, point),
            CoordinateSpace::Screen => Ok(ScreenPoint::new(
                self.backend.to_native(point.x)?,
                self.backend.to_native(point.y)?,
            )),
        }
    }

    fn paint_lines<S: DrawingSurface>(
        &self,
        surface: &mut S,
        series: &Series<B::Value>,
    ) -> PlotResult<()> {
        surface.begin_path()?;
        for (index, point) in series.data_points().iter().enumerate() {
            let screen = self.project(series.space(), *point)?;
            if index == 0 {
                surface.move_to(screen.x, screen.y)?;
            } else {
                surface.line_to(screen.x, screen.y)?;
            }
        }
        if let Some(style) = series.line_style() {
            surface.apply_line_style(style)?;
        }
        surface.stroke()
    }

    fn paint_points<S: DrawingSurface>(
        &self,
        surface: &mut S,
        series: &Series<B::Value>,
    ) -> PlotResult<()> {
        for (point, color) in series.iter() {
            let screen = self.project(series.space(), point)?;
            surface.set_fill_color(color.unwrap_or(POINT_FALLBACK_COLOR))?;
            surface.fill_rect(screen.x, screen.y, 1.0, 1.0)?;
        }
        Ok(())
    }

    fn paint_rectangles<S: DrawingSurface>(
        &self,
        surface: &mut S,
        series: &Series<B::Value>,
        width: B::Value,
        height: B::Value,
    ) -> PlotResult<()> {
        let (width_px, height_px) = match series.space() {
            CoordinateSpace::Data => {
                self.transform
                    .data_extent_to_screen(self.backend, width, height)?
            }
            CoordinateSpace::Screen => (
                self.backend.to_native(width)?,
                self.backend.to_native(height)?,
            ),
        };
        if let Some(style) = series.line_style() {
            surface.apply_line_style(style)?;
        }
        for (point, color) in series.iter() {
            let center = self.project(series.space(), point)?;
            surface.begin_path()?;
            surface.rect(
                center.x - width_px / 2.0,
                center.y - height_px / 2.0,
                width_px,
                height_px,
            )?;
            if let Some(color) = color {
                surface.set_fill_color(color)?;
                surface.fill()?;
            }
            surface.stroke()?;
        }
        Ok(())
    }

    fn paint_text<S: DrawingSurface>(
        &self,
        surface: &mut S,
        series: &Series<B::Value>,
        text: &str,
        style: &TextStyle,
    ) -> PlotResult<()> {
        surface.set_font(&style.font)?;
        surface.set_text_align(style.align)?;
        for (point, color) in series.iter() {
            let anchor = self.project(series.space(), point)?;
            surface.set_fill_color(color.unwrap_or(TEXT_FALLBACK_COLOR))?;
            surface.fill_text(text, anchor.x, anchor.y)?;
        }
        Ok(())
    }
}
