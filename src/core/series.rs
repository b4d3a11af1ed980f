use serde::{Deserialize, Serialize};

use crate::core::types::DataPoint;
use crate::error::{PlotError, PlotResult};
use crate::render::{Color, LineStyle, TextStyle};

/// Coordinate system the points of a series are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CoordinateSpace {
    /// Points are data-space values mapped through the view transform.
    #[default]
    Data,
    /// Points are already canvas pixels.
    Screen,
}

/// Render kind of a series, carrying only the fields that kind needs.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesKind<V> {
    /// Consecutive points joined by one stroked path.
    Lines,
    /// One 1x1 pixel mark per point.
    Points,
    /// Rectangles of a fixed size centered on each point.
    ///
    /// The size is in the series' coordinate space.
    Rectangles { width: V, height: V },
    /// The same text stamped at each point.
    Text { text: String, style: TextStyle },
}

impl<V> SeriesKind<V> {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Lines => "lines",
            Self::Points => "points",
            Self::Rectangles { .. } => "rectangles",
            Self::Text { .. } => "text",
        }
    }
}

/// One typed layer of points plus styling.
///
/// The kind is fixed at construction. Points and their per-point colors are
/// kept in parallel and in insertion order, which is also the draw order.
#[derive(Debug, Clone, PartialEq)]
pub struct Series<V = f64> {
    kind: SeriesKind<V>,
    space: CoordinateSpace,
    points: Vec<DataPoint<V>>,
    styles: Vec<Option<Color>>,
    line_style: Option<LineStyle>,
}

impl<V: Copy> Series<V> {
    fn with_kind(kind: SeriesKind<V>, space: CoordinateSpace) -> Self {
        Self {
            kind,
            space,
            points: Vec::new(),
            styles: Vec::new(),
            line_style: None,
        }
    }

    #[must_use]
    pub fn lines(space: CoordinateSpace) -> Self {
        Self::with_kind(SeriesKind::Lines, space)
    }

    #[must_use]
    pub fn points(space: CoordinateSpace) -> Self {
        Self::with_kind(SeriesKind::Points, space)
    }

    #[must_use]
    pub fn rectangles(space: CoordinateSpace, width: V, height: V) -> Self {
        Self::with_kind(SeriesKind::Rectangles { width, height }, space)
    }

    pub fn text(
        space: CoordinateSpace,
        text: impl Into<String>,
        style: TextStyle,
    ) -> PlotResult<Self> {
        style.validate()?;
        Ok(Self::with_kind(
            SeriesKind::Text {
                text: text.into(),
                style,
            },
            space,
        ))
    }

    /// Appends a point with an optional per-point color.
    pub fn push(&mut self, point: DataPoint<V>, color: Option<Color>) -> PlotResult<()> {
        if let Some(color) = color {
            color.validate()?;
        }
        self.points.push(point);
        self.styles.push(color);
        Ok(())
    }

    pub fn extend<I>(&mut self, items: I) -> PlotResult<()>
    where
        I: IntoIterator<Item = (DataPoint<V>, Option<Color>)>,
    {
        for (point, color) in items {
            self.push(point, color)?;
        }
        Ok(())
    }

    pub fn clear_points(&mut self) {
        self.points.clear();
        self.styles.clear();
    }

    pub fn with_line_style(mut self, style: LineStyle) -> PlotResult<Self> {
        self.set_line_style(Some(style))?;
        Ok(self)
    }

    /// Replaces the shared line style; `None` falls back to surface defaults.
    pub fn set_line_style(&mut self, style: Option<LineStyle>) -> PlotResult<()> {
        if let Some(style) = style {
            style.validate()?;
        }
        self.line_style = style;
        Ok(())
    }

    /// Replaces the text of a `Text` series.
    pub fn set_text(&mut self, value: impl Into<String>) -> PlotResult<()> {
        match &mut self.kind {
            SeriesKind::Text { text, .. } => {
                *text = value.into();
                Ok(())
            }
            other => Err(kind_mismatch("text", other.name())),
        }
    }

    /// Replaces the text style of a `Text` series.
    pub fn set_text_style(&mut self, value: TextStyle) -> PlotResult<()> {
        value.validate()?;
        match &mut self.kind {
            SeriesKind::Text { style, .. } => {
                *style = value;
                Ok(())
            }
            other => Err(kind_mismatch("text", other.name())),
        }
    }

    #[must_use]
    pub fn kind(&self) -> &SeriesKind<V> {
        &self.kind
    }

    #[must_use]
    pub fn space(&self) -> CoordinateSpace {
        self.space
    }

    #[must_use]
    pub fn data_points(&self) -> &[DataPoint<V>] {
        &self.points
    }

    #[must_use]
    pub fn styles(&self) -> &[Option<Color>] {
        &self.styles
    }

    #[must_use]
    pub fn line_style(&self) -> Option<LineStyle> {
        self.line_style
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DataPoint<V>, Option<Color>)> + '_ {
        self.points.iter().copied().zip(self.styles.iter().copied())
    }
}

fn kind_mismatch(expected: &str, actual: &str) -> PlotError {
    PlotError::InvalidData(format!("operation requires a {expected} series, got {actual}"))
}
