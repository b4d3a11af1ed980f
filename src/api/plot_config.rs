use serde::{Deserialize, Serialize};

use crate::core::{Canvas, NavigationConfig, PrecisionConfig};
use crate::error::{PlotError, PlotResult};
use crate::render::Color;

/// Public plot bootstrap configuration.
///
/// Serializable so hosts can keep plot setup next to their own settings.
/// Initial bounds are native numbers; use `Plot::with_area` to start from
/// exact decimal bounds instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    pub canvas: Canvas,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
    #[serde(default = "default_background")]
    pub background: Color,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub precision: PrecisionConfig,
}

impl PlotConfig {
    #[must_use]
    pub fn new(canvas: Canvas, left: f64, bottom: f64, right: f64, top: f64) -> Self {
        Self {
            canvas,
            left,
            bottom,
            right,
            top,
            background: default_background(),
            navigation: NavigationConfig::default(),
            precision: PrecisionConfig::default(),
        }
    }

    #[must_use]
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    #[must_use]
    pub fn with_navigation(mut self, navigation: NavigationConfig) -> Self {
        self.navigation = navigation;
        self
    }

    #[must_use]
    pub fn with_precision(mut self, precision: PrecisionConfig) -> Self {
        self.precision = precision;
        self
    }

    pub fn validate(self) -> PlotResult<Self> {
        self.canvas.validate()?;
        self.background.validate()?;
        self.navigation.validate()?;
        self.precision.validate()?;
        Ok(self)
    }

    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|err| PlotError::InvalidData(format!("failed to parse plot config: {err}")))?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self).map_err(|err| {
            PlotError::InvalidData(format!("failed to serialize plot config: {err}"))
        })
    }
}

fn default_background() -> Color {
    Color::BLACK
}

#[cfg(test)]
mod tests {
    use super::PlotConfig;
    use crate::core::Canvas;
    use crate::render::Color;

    #[test]
    fn json_round_trip_preserves_config() {
        let config = PlotConfig::new(Canvas::new(640, 480), -1.0, -2.0, 3.0, 4.0)
            .with_background(Color::WHITE);
        let json = config.to_json_pretty().expect("serialize");
        let parsed = PlotConfig::from_json_str(&json).expect("parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn missing_optional_sections_use_defaults() {
        let json = r#"{
            "canvas": { "width": 100, "height": 50 },
            "left": 0.0, "bottom": 0.0, "right": 10.0, "top": 5.0
        }"#;
        let config = PlotConfig::from_json_str(json).expect("parse");
        assert_eq!(config.background, Color::BLACK);
        assert_eq!(config.navigation.wheel_step_units, 120.0);
        assert_eq!(config.precision.coefficient_guard_digits, 4);
    }

    #[test]
    fn invalid_canvas_in_json_is_rejected() {
        let json = r#"{
            "canvas": { "width": 0, "height": 50 },
            "left": 0.0, "bottom": 0.0, "right": 10.0, "top": 5.0
        }"#;
        assert!(PlotConfig::from_json_str(json).is_err());
    }
}
