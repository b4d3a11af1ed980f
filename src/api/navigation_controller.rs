use tracing::{trace, warn};

use crate::core::{NumericBackend, ScreenPoint, pan_area, resolve_zoom_step, zoom_area};
use crate::error::{PlotError, PlotResult};
use crate::interaction::PointerButton;
use crate::render::DrawingSurface;

use super::Plot;

impl<S: DrawingSurface, B: NumericBackend> Plot<S, B> {
    /// Starts a drag at `(x, y)`.
    ///
    /// Returns `false` when the position lies outside the canvas and the event
    /// was ignored.
    pub fn pointer_down(&mut self, x: f64, y: f64, button: PointerButton) -> PlotResult<bool> {
        let Some(position) = self.accept_position(x, y) else {
            return Ok(false);
        };
        self.navigation.on_pointer_down(position, button);
        self.drag_origin = Some(self.transform);
        self.changed = true;
        Ok(true)
    }

    /// Moves the pointer; pans the view while a drag is active.
    ///
    /// The pan is measured from the drag anchor against the area captured at
    /// pointer-down, so a drag that returns to its anchor restores the original
    /// area exactly. Errors leave both view and pointer state untouched.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> PlotResult<bool> {
        let Some(position) = self.accept_position(x, y) else {
            return Ok(false);
        };

        if self.navigation.is_dragging() {
            let anchor = self.navigation.drag_anchor();
            if let (Some(anchor), Some(origin)) = (anchor, self.drag_origin) {
                let (dx, dy) = position.offset_from(anchor);
                let panned = pan_area(
                    &self.backend,
                    &origin.area(),
                    origin.canvas(),
                    dx,
                    dy,
                    self.precision,
                )
                .and_then(|area| self.commit_area(area));
                if let Err(err) = panned {
                    warn!(error = %err, dx, dy, "rejected pan");
                    return Err(err);
                }
            }
        }

        self.navigation.on_pointer_move(position);
        self.changed = true;
        Ok(true)
    }

    /// Ends a drag. The release position is recorded only if it lies on the canvas.
    pub fn pointer_up(&mut self, x: f64, y: f64) {
        let position = self.accept_position(x, y);
        self.navigation.on_pointer_up(position);
        self.drag_origin = None;
        self.changed = true;
    }

    /// Zooms around `(x, y)`. A positive `delta` zooms in.
    pub fn wheel(&mut self, delta: f64, x: f64, y: f64) -> PlotResult<bool> {
        let Some(cursor) = self.accept_position(x, y) else {
            return Ok(false);
        };
        let Some(step) = resolve_zoom_step(delta, self.navigation_config)? else {
            return Ok(false);
        };

        let zoomed = zoom_area(
            &self.backend,
            &self.transform.area(),
            self.transform.canvas(),
            cursor,
            step,
            self.precision,
        )
        .and_then(|area| self.commit_area(area));
        if let Err(err) = zoomed {
            warn!(error = %err, delta, "rejected zoom");
            return Err(err);
        }

        self.navigation.on_pointer_move(cursor);
        self.rebase_drag();
        Ok(true)
    }

    /// Zooms around the last known pointer position.
    ///
    /// Returns `false` when no pointer position has been seen yet.
    pub fn wheel_at_cursor(&mut self, delta: f64) -> PlotResult<bool> {
        match self.navigation.last_pointer() {
            Some(cursor) => self.wheel(delta, cursor.x, cursor.y),
            None => Ok(false),
        }
    }

    pub fn key_down(&mut self, code: u32) {
        self.navigation.on_key(code);
        self.changed = true;
    }

    pub fn key_press(&mut self, code: u32) {
        self.navigation.on_key(code);
        self.changed = true;
    }

    fn accept_position(&self, x: f64, y: f64) -> Option<ScreenPoint> {
        match self.validate_pointer(x, y) {
            Ok(position) => Some(position),
            Err(err) => {
                trace!(error = %err, "ignoring pointer event");
                None
            }
        }
    }

    fn validate_pointer(&self, x: f64, y: f64) -> PlotResult<ScreenPoint> {
        let position = ScreenPoint::new(x, y);
        if !self.transform.canvas().contains(position) {
            return Err(PlotError::OutOfBoundsInput { x, y });
        }
        Ok(position)
    }
}
