use serde::{Deserialize, Serialize};

use crate::core::{Canvas, NumericBackend};
use crate::error::{PlotError, PlotResult};
use crate::interaction::NavigationState;
use crate::render::DrawingSurface;

use super::Plot;

/// Serializable view state for host diagnostics.
///
/// Bounds are rendered as strings so decimal values keep their exact digits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSnapshot {
    pub backend: String,
    pub canvas: Canvas,
    pub left: String,
    pub bottom: String,
    pub right: String,
    pub top: String,
    pub navigation: NavigationState,
    pub series_count: usize,
    pub changed: bool,
}

impl<S: DrawingSurface, B: NumericBackend> Plot<S, B> {
    #[must_use]
    pub fn snapshot(&self) -> ViewSnapshot {
        let area = self.plot_area();
        ViewSnapshot {
            backend: B::NAME.to_owned(),
            canvas: self.canvas(),
            left: area.left().to_string(),
            bottom: area.bottom().to_string(),
            right: area.right().to_string(),
            top: area.top().to_string(),
            navigation: self.navigation,
            series_count: self.series.len(),
            changed: self.changed,
        }
    }

    pub fn snapshot_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(&self.snapshot()).map_err(|err| {
            PlotError::InvalidData(format!("failed to serialize view snapshot: {err}"))
        })
    }
}
