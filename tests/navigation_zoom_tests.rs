use approx::assert_relative_eq;
use plot_rs::api::{Plot, PlotConfig};
use plot_rs::core::{Canvas, DecimalBackend, FloatBackend, NumericBackend, PlotArea, ScreenPoint};
use plot_rs::render::NullSurface;
use rust_decimal::Decimal;

fn float_plot() -> Plot<NullSurface> {
    let config = PlotConfig::new(Canvas::new(100, 100), 0.0, 0.0, 100.0, 100.0);
    Plot::new(NullSurface::default(), FloatBackend, config).expect("plot init")
}

fn dec(text: &str) -> Decimal {
    DecimalBackend.parse(text).expect("decimal literal")
}

fn decimal_plot(right: &str, top: &str) -> Plot<NullSurface, DecimalBackend> {
    let config = PlotConfig::new(Canvas::new(1000, 1000), 0.0, 0.0, 1.0, 1.0);
    let area = PlotArea::new(&DecimalBackend, dec("0"), dec("0"), dec(right), dec(top))
        .expect("area");
    Plot::with_area(NullSurface::default(), DecimalBackend, config, area).expect("plot init")
}

#[test]
fn one_notch_at_center_trims_ten_percent_per_edge() {
    let mut plot = float_plot();

    assert!(plot.wheel(120.0, 50.0, 50.0).expect("zoom"));

    let area = plot.plot_area();
    assert_relative_eq!(area.left(), 10.0, epsilon = 1e-9);
    assert_relative_eq!(area.right(), 90.0, epsilon = 1e-9);
    assert_relative_eq!(area.bottom(), 10.0, epsilon = 1e-9);
    assert_relative_eq!(area.top(), 90.0, epsilon = 1e-9);
}

#[test]
fn zoom_direction_follows_wheel_sign() {
    let mut plot = float_plot();
    let width = plot.plot_area().width();

    plot.wheel(120.0, 30.0, 70.0).expect("zoom in");
    let zoomed_in = plot.plot_area().width();
    assert!(zoomed_in < width);

    plot.wheel(-240.0, 30.0, 70.0).expect("zoom out");
    assert!(plot.plot_area().width() > zoomed_in);
    assert!(plot.plot_area().width() > width);
}

#[test]
fn oversized_wheel_delta_is_clamped() {
    let mut plot = float_plot();

    plot.wheel(120_000.0, 50.0, 50.0).expect("zoom");

    let area = plot.plot_area();
    assert_relative_eq!(area.left(), 25.0, epsilon = 1e-9);
    assert_relative_eq!(area.right(), 75.0, epsilon = 1e-9);
}

#[test]
fn float_point_under_cursor_stays_put() {
    let mut plot = float_plot();
    let cursor = ScreenPoint::new(25.0, 75.0);
    let before = plot.to_plot_coords(cursor).expect("before");

    plot.wheel(120.0, cursor.x, cursor.y).expect("zoom");

    let after = plot.to_plot_coords(cursor).expect("after");
    assert_relative_eq!(after.x, before.x, epsilon = 1e-9);
    assert_relative_eq!(after.y, before.y, epsilon = 1e-9);
}

#[test]
fn decimal_point_under_cursor_stays_put_after_rescale() {
    let mut plot = decimal_plot("100", "100");
    let cursor = ScreenPoint::new(250.0, 750.0);
    let before = plot.to_plot_coords(cursor).expect("before");

    plot.wheel(120.0, cursor.x, cursor.y).expect("zoom");

    let area = plot.plot_area();
    assert_eq!(area.left(), dec("5"));
    assert_eq!(area.right(), dec("85"));
    assert_eq!(area.left().scale(), 2);
    let after = plot.to_plot_coords(cursor).expect("after");
    assert_eq!(after.x, before.x);
    assert_eq!(after.y, before.y);
}

#[test]
fn decimal_coarse_span_rounds_to_integers() {
    let mut plot = decimal_plot("20000", "20000");

    plot.wheel(120.0, 500.0, 500.0).expect("zoom");

    let area = plot.plot_area();
    assert_eq!(area.left(), dec("2000"));
    assert_eq!(area.right(), dec("18000"));
    assert_eq!(area.left().scale(), 0);
    assert_eq!(area.right().scale(), 0);
}

#[test]
fn repeated_float_zoom_never_collapses_the_area() {
    let mut plot = float_plot();

    for _ in 0..400 {
        let _ = plot.wheel(120.0, 50.0, 50.0);
    }

    let area = plot.plot_area();
    assert!(area.width() > 0.0);
    assert!(area.height() > 0.0);
    let center = plot.to_plot_coords(ScreenPoint::new(50.0, 50.0)).expect("center");
    assert!(center.x.is_finite());
}

#[test]
fn repeated_decimal_zoom_fails_cleanly_at_precision_limit() {
    let mut plot = decimal_plot("100", "100");
    let mut failures = 0;

    for _ in 0..400 {
        if plot.wheel(120.0, 500.0, 500.0).is_err() {
            failures += 1;
        }
    }

    assert!(failures > 0);
    let area = plot.plot_area();
    assert!(area.width() > Decimal::ZERO);
    assert!(area.height() > Decimal::ZERO);
}

#[test]
fn ignored_wheel_events_leave_view_untouched() {
    let mut plot = float_plot();
    let original = plot.plot_area();

    assert!(!plot.wheel(0.0, 50.0, 50.0).expect("zero delta"));
    assert!(!plot.wheel(120.0, 500.0, 50.0).expect("outside canvas"));
    assert!(plot.wheel(f64::NAN, 50.0, 50.0).is_err());

    assert_eq!(plot.plot_area(), original);
}

#[test]
fn wheel_at_cursor_uses_last_hover_position() {
    let mut plot = float_plot();

    assert!(!plot.wheel_at_cursor(120.0).expect("no pointer yet"));

    plot.pointer_move(50.0, 50.0).expect("hover");
    assert!(plot.wheel_at_cursor(120.0).expect("zoom"));
    assert_relative_eq!(plot.plot_area().left(), 10.0, epsilon = 1e-9);
}

#[test]
fn custom_navigation_config_changes_notch_size() {
    let mut plot = float_plot();
    let mut navigation = plot.navigation_config();
    navigation.zoom_step_ratio = 0.2;
    plot.set_navigation_config(navigation).expect("config");

    plot.wheel(120.0, 50.0, 50.0).expect("zoom");

    assert_relative_eq!(plot.plot_area().left(), 20.0, epsilon = 1e-9);
    assert_relative_eq!(plot.plot_area().right(), 80.0, epsilon = 1e-9);
}
