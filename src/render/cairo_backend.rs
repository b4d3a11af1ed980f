use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::error::{PlotError, PlotResult};
use crate::render::{Color, DrawingSurface, FontSpec, LineCap, LineJoin, TextAlign};

/// Cairo + Pango drawing surface.
///
/// Cairo has a single source color and consumes paths on fill/stroke, so this
/// adapter keeps separate fill/stroke colors and preserves the current path
/// the way a 2D canvas context does.
#[derive(Debug)]
pub struct CairoSurface {
    context: Context,
    image: Option<ImageSurface>,
    fill_color: Color,
    stroke_color: Color,
    font: FontSpec,
    text_align: TextAlign,
}

impl CairoSurface {
    /// Wraps an external context, e.g. from a GTK draw callback.
    #[must_use]
    pub fn new(context: Context) -> Self {
        Self {
            context,
            image: None,
            fill_color: Color::BLACK,
            stroke_color: Color::BLACK,
            font: FontSpec::default(),
            text_align: TextAlign::Left,
        }
    }

    /// Creates an offscreen ARGB32 image surface of the given size.
    pub fn offscreen(width: i32, height: i32) -> PlotResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(PlotError::Surface(
                "cairo surface size must be > 0".to_owned(),
            ));
        }
        let image = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&image)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        let mut surface = Self::new(context);
        surface.image = Some(image);
        Ok(surface)
    }

    #[must_use]
    pub fn image_surface(&self) -> Option<&ImageSurface> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn context(&self) -> &Context {
        &self.context
    }

    fn apply_color(&self, color: Color) {
        self.context
            .set_source_rgba(color.red, color.green, color.blue, color.alpha);
    }

    // Runs `draw` on a fresh path and restores the caller's path afterwards.
    fn with_detached_path(&self, draw: impl FnOnce(&Context) -> PlotResult<()>) -> PlotResult<()> {
        let saved = self
            .context
            .copy_path()
            .map_err(|err| map_backend_error("failed to copy path", err))?;
        self.context.new_path();
        let result = draw(&self.context);
        self.context.new_path();
        self.context.append_path(&saved);
        result
    }
}

impl DrawingSurface for CairoSurface {
    fn set_fill_color(&mut self, color: Color) -> PlotResult<()> {
        color.validate()?;
        self.fill_color = color;
        Ok(())
    }

    fn set_stroke_color(&mut self, color: Color) -> PlotResult<()> {
        color.validate()?;
        self.stroke_color = color;
        Ok(())
    }

    fn set_line_width(&mut self, width: f64) -> PlotResult<()> {
        self.context.set_line_width(width);
        Ok(())
    }

    fn set_line_cap(&mut self, cap: LineCap) -> PlotResult<()> {
        self.context.set_line_cap(match cap {
            LineCap::Butt => cairo::LineCap::Butt,
            LineCap::Round => cairo::LineCap::Round,
            LineCap::Square => cairo::LineCap::Square,
        });
        Ok(())
    }

    fn set_line_join(&mut self, join: LineJoin) -> PlotResult<()> {
        self.context.set_line_join(match join {
            LineJoin::Bevel => cairo::LineJoin::Bevel,
            LineJoin::Round => cairo::LineJoin::Round,
            LineJoin::Miter => cairo::LineJoin::Miter,
        });
        Ok(())
    }

    fn begin_path(&mut self) -> PlotResult<()> {
        self.context.new_path();
        Ok(())
    }

    fn move_to(&mut self, x: f64, y: f64) -> PlotResult<()> {
        self.context.move_to(x, y);
        Ok(())
    }

    fn line_to(&mut self, x: f64, y: f64) -> PlotResult<()> {
        self.context.line_to(x, y);
        Ok(())
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> PlotResult<()> {
        self.context.rectangle(x, y, width, height);
        Ok(())
    }

    fn stroke(&mut self) -> PlotResult<()> {
        self.apply_color(self.stroke_color);
        self.context
            .stroke_preserve()
            .map_err(|err| map_backend_error("failed to stroke path", err))
    }

    fn fill(&mut self) -> PlotResult<()> {
        self.apply_color(self.fill_color);
        self.context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill path", err))
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> PlotResult<()> {
        let color = self.fill_color;
        self.with_detached_path(|context| {
            context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
            context.rectangle(x, y, width, height);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill rectangle", err))
        })
    }

    fn set_font(&mut self, font: &FontSpec) -> PlotResult<()> {
        font.validate()?;
        self.font = font.clone();
        Ok(())
    }

    fn set_text_align(&mut self, align: TextAlign) -> PlotResult<()> {
        self.text_align = align;
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> PlotResult<()> {
        let color = self.fill_color;
        let description = FontDescription::from_string(&format!(
            "{} {}px",
            self.font.family, self.font.size_px
        ));
        let align = self.text_align;
        self.with_detached_path(|context| {
            let layout = pangocairo::functions::create_layout(context);
            layout.set_font_description(Some(&description));
            layout.set_text(text);

            let (text_width, _) = layout.pixel_size();
            let left = match align {
                TextAlign::Left => x,
                TextAlign::Center => x - f64::from(text_width) / 2.0,
                TextAlign::Right => x - f64::from(text_width),
            };
            // Anchor on the alphabetic baseline like a canvas context.
            let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);

            context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
            context.move_to(left, y - baseline);
            pangocairo::functions::show_layout(context, &layout);
            Ok(())
        })
    }
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> PlotError {
    PlotError::Surface(format!("{prefix}: {err}"))
}
