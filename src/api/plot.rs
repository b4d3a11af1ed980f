use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    Canvas, DataPoint, FloatBackend, NavigationConfig, NumericBackend, PlotArea, PrecisionConfig,
    ScreenPoint, Series, ViewTransform,
};
use crate::error::PlotResult;
use crate::interaction::NavigationState;
use crate::render::{Color, DrawingSurface};

use super::PlotConfig;

/// Stable handle of a series registered on a plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeriesId(pub(super) u64);

impl SeriesId {
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Main facade consumed by host applications.
///
/// A `Plot` owns its drawing surface, the current view transform (which
/// carries the visible `PlotArea`), navigation state and series. All mutation
/// is single-threaded and each handler leaves the view consistent before it
/// returns.
pub struct Plot<S: DrawingSurface, B: NumericBackend = FloatBackend> {
    pub(super) surface: S,
    pub(super) backend: B,
    pub(super) transform: ViewTransform<B::Value>,
    pub(super) drag_origin: Option<ViewTransform<B::Value>>,
    pub(super) navigation: NavigationState,
    pub(super) navigation_config: NavigationConfig,
    pub(super) precision: PrecisionConfig,
    pub(super) background: Color,
    pub(super) series: IndexMap<SeriesId, Series<B::Value>>,
    pub(super) next_series_id: u64,
    pub(super) changed: bool,
    pub(super) redraw: bool,
}

impl<S: DrawingSurface, B: NumericBackend> Plot<S, B> {
    /// Builds a plot whose initial view comes from the config's native bounds.
    pub fn new(surface: S, backend: B, config: PlotConfig) -> PlotResult<Self> {
        let config = config.validate()?;
        let area = PlotArea::from_native(
            &backend,
            config.left,
            config.bottom,
            config.right,
            config.top,
        )?;
        Self::with_area(surface, backend, config, area)
    }

    /// Builds a plot starting from an explicit area, ignoring the config's bounds.
    pub fn with_area(
        surface: S,
        backend: B,
        config: PlotConfig,
        area: PlotArea<B::Value>,
    ) -> PlotResult<Self> {
        let config = config.validate()?;
        let transform = ViewTransform::derive(&backend, area, config.canvas, config.precision)?;
        debug!(
            backend = B::NAME,
            width = config.canvas.width,
            height = config.canvas.height,
            "plot created"
        );
        Ok(Self {
            surface,
            backend,
            transform,
            drag_origin: None,
            navigation: NavigationState::default(),
            navigation_config: config.navigation,
            precision: config.precision,
            background: config.background,
            series: IndexMap::new(),
            next_series_id: 0,
            changed: true,
            redraw: false,
        })
    }

    #[must_use]
    pub fn backend(&self) -> B {
        self.backend
    }

    #[must_use]
    pub fn canvas(&self) -> Canvas {
        self.transform.canvas()
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea<B::Value> {
        self.transform.area()
    }

    #[must_use]
    pub fn transform(&self) -> &ViewTransform<B::Value> {
        &self.transform
    }

    #[must_use]
    pub fn navigation_state(&self) -> NavigationState {
        self.navigation
    }

    #[must_use]
    pub fn navigation_config(&self) -> NavigationConfig {
        self.navigation_config
    }

    pub fn set_navigation_config(&mut self, config: NavigationConfig) -> PlotResult<()> {
        self.navigation_config = config.validate()?;
        Ok(())
    }

    #[must_use]
    pub fn precision_config(&self) -> PrecisionConfig {
        self.precision
    }

    #[must_use]
    pub fn background(&self) -> Color {
        self.background
    }

    pub fn set_background(&mut self, color: Color) -> PlotResult<()> {
        color.validate()?;
        self.background = color;
        self.changed = true;
        Ok(())
    }

    pub fn to_screen_coords(&self, point: DataPoint<B::Value>) -> PlotResult<ScreenPoint> {
        self.transform.to_screen_coords(&self.backend, point)
    }

    pub fn to_plot_coords(&self, point: ScreenPoint) -> PlotResult<DataPoint<B::Value>> {
        self.transform.to_plot_coords(&self.backend, point)
    }

    /// Replaces the visible area and re-derives the transform.
    pub fn set_plot_area(&mut self, area: PlotArea<B::Value>) -> PlotResult<()> {
        self.commit_area(area)?;
        self.rebase_drag();
        Ok(())
    }

    /// Replaces the canvas and re-derives the transform.
    pub fn set_canvas(&mut self, canvas: Canvas) -> PlotResult<()> {
        let transform =
            ViewTransform::derive(&self.backend, self.transform.area(), canvas, self.precision)?;
        self.transform = transform;
        self.changed = true;
        debug!(width = canvas.width, height = canvas.height, "canvas resized");
        self.rebase_drag();
        Ok(())
    }

    #[must_use]
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    pub fn set_changed(&mut self, changed: bool) {
        self.changed = changed;
    }

    #[must_use]
    pub fn is_redraw(&self) -> bool {
        self.redraw
    }

    /// Forces the next `render` call to repaint even if nothing changed.
    pub fn request_redraw(&mut self) {
        self.redraw = true;
    }

    #[must_use]
    pub fn needs_render(&self) -> bool {
        self.changed || self.redraw
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Derives the transform for `area` and commits both, or leaves the view untouched.
    pub(super) fn commit_area(&mut self, area: PlotArea<B::Value>) -> PlotResult<()> {
        let transform =
            ViewTransform::derive(&self.backend, area, self.transform.canvas(), self.precision)?;
        self.transform = transform;
        self.changed = true;
        debug!(
            left = %area.left(),
            bottom = %area.bottom(),
            right = %area.right(),
            top = %area.top(),
            "plot area changed"
        );
        Ok(())
    }

    // A drag in progress continues from the current view and pointer.
    pub(super) fn rebase_drag(&mut self) {
        if self.navigation.is_dragging() {
            self.drag_origin = Some(self.transform);
            self.navigation.rebase_drag_anchor();
        }
    }
}
