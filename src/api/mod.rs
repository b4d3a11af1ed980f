mod navigation_controller;
mod plot;
mod plot_config;
mod render_pipeline;
mod series_registry;
mod view_snapshot;

pub use plot::{Plot, SeriesId};
pub use plot_config::PlotConfig;
pub use view_snapshot::ViewSnapshot;
