use serde::{Deserialize, Serialize};

use crate::error::PlotResult;
use crate::render::{Color, DrawingSurface, FontSpec, LineCap, LineJoin, TextAlign};

/// One captured drawing call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    SetFillColor(Color),
    SetStrokeColor(Color),
    SetLineWidth(f64),
    SetLineCap(LineCap),
    SetLineJoin(LineJoin),
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Rect { x: f64, y: f64, width: f64, height: f64 },
    Stroke,
    Fill,
    FillRect { x: f64, y: f64, width: f64, height: f64 },
    SetFont(FontSpec),
    SetTextAlign(TextAlign),
    FillText { text: String, x: f64, y: f64 },
}

/// Surface that records every call in order.
///
/// Recorded passes are plain data, so hosts can diff them or dump them as JSON.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    fn push(&mut self, command: DrawCommand) -> PlotResult<()> {
        self.commands.push(command);
        Ok(())
    }
}

impl DrawingSurface for RecordingSurface {
    fn set_fill_color(&mut self, color: Color) -> PlotResult<()> {
        self.push(DrawCommand::SetFillColor(color))
    }

    fn set_stroke_color(&mut self, color: Color) -> PlotResult<()> {
        self.push(DrawCommand::SetStrokeColor(color))
    }

    fn set_line_width(&mut self, width: f64) -> PlotResult<()> {
        self.push(DrawCommand::SetLineWidth(width))
    }

    fn set_line_cap(&mut self, cap: LineCap) -> PlotResult<()> {
        self.push(DrawCommand::SetLineCap(cap))
    }

    fn set_line_join(&mut self, join: LineJoin) -> PlotResult<()> {
        self.push(DrawCommand::SetLineJoin(join))
    }

    fn begin_path(&mut self) -> PlotResult<()> {
        self.push(DrawCommand::BeginPath)
    }

    fn move_to(&mut self, x: f64, y: f64) -> PlotResult<()> {
        self.push(DrawCommand::MoveTo { x, y })
    }

    fn line_to(&mut self, x: f64, y: f64) -> PlotResult<()> {
        self.push(DrawCommand::LineTo { x, y })
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> PlotResult<()> {
        self.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
        })
    }

    fn stroke(&mut self) -> PlotResult<()> {
        self.push(DrawCommand::Stroke)
    }

    fn fill(&mut self) -> PlotResult<()> {
        self.push(DrawCommand::Fill)
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> PlotResult<()> {
        self.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
        })
    }

    fn set_font(&mut self, font: &FontSpec) -> PlotResult<()> {
        self.push(DrawCommand::SetFont(font.clone()))
    }

    fn set_text_align(&mut self, align: TextAlign) -> PlotResult<()> {
        self.push(DrawCommand::SetTextAlign(align))
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> PlotResult<()> {
        self.push(DrawCommand::FillText {
            text: text.to_owned(),
            x,
            y,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{DrawCommand, RecordingSurface};
    use crate::render::{Color, DrawingSurface, LineCap, LineJoin, LineStyle};

    #[test]
    fn apply_line_style_records_all_fields_in_order() {
        let mut surface = RecordingSurface::default();
        surface
            .apply_line_style(LineStyle::new(Color::WHITE, 3.0, LineCap::Round, LineJoin::Bevel))
            .expect("apply");

        assert_eq!(
            surface.commands(),
            &[
                DrawCommand::SetStrokeColor(Color::WHITE),
                DrawCommand::SetLineWidth(3.0),
                DrawCommand::SetLineCap(LineCap::Round),
                DrawCommand::SetLineJoin(LineJoin::Bevel),
            ]
        );
    }

    #[test]
    fn take_commands_drains_the_log() {
        let mut surface = RecordingSurface::default();
        surface.begin_path().expect("begin");
        assert_eq!(surface.take_commands(), vec![DrawCommand::BeginPath]);
        assert!(surface.commands().is_empty());
    }
}
