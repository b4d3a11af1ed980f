use approx::assert_relative_eq;
use plot_rs::api::{Plot, PlotConfig};
use plot_rs::core::{
    Canvas, DataPoint, DecimalBackend, FloatBackend, NumericBackend, PlotArea, ScreenPoint,
};
use plot_rs::render::NullSurface;
use rust_decimal::Decimal;

fn float_plot(width: u32, height: u32, right: f64, top: f64) -> Plot<NullSurface> {
    let config = PlotConfig::new(Canvas::new(width, height), 0.0, 0.0, right, top);
    Plot::new(NullSurface::default(), FloatBackend, config).expect("plot init")
}

fn dec(text: &str) -> Decimal {
    DecimalBackend.parse(text).expect("decimal literal")
}

fn decimal_plot(
    left: &str,
    bottom: &str,
    right: &str,
    top: &str,
) -> Plot<NullSurface, DecimalBackend> {
    let backend = DecimalBackend;
    let area =
        PlotArea::new(&backend, dec(left), dec(bottom), dec(right), dec(top)).expect("area");
    let config = PlotConfig::new(Canvas::new(1000, 500), 0.0, 0.0, 1.0, 1.0);
    Plot::with_area(NullSurface::default(), backend, config, area).expect("plot init")
}

#[test]
fn float_corners_map_to_inverted_canvas_corners() {
    let plot = float_plot(1000, 500, 100.0, 50.0);

    let bottom_left = plot.to_screen_coords(DataPoint::new(0.0, 0.0)).expect("screen");
    assert_relative_eq!(bottom_left.x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(bottom_left.y, 500.0, epsilon = 1e-9);

    let top_right = plot.to_screen_coords(DataPoint::new(100.0, 50.0)).expect("screen");
    assert_relative_eq!(top_right.x, 1000.0, epsilon = 1e-9);
    assert_relative_eq!(top_right.y, 0.0, epsilon = 1e-9);
}

#[test]
fn decimal_corners_map_exactly() {
    let plot = decimal_plot("0.00", "0.00", "100.00", "50.00");

    let bottom_left = plot
        .to_screen_coords(DataPoint::new(dec("0"), dec("0")))
        .expect("screen");
    assert_eq!(bottom_left, ScreenPoint::new(0.0, 500.0));

    let top_right = plot
        .to_screen_coords(DataPoint::new(dec("100"), dec("50")))
        .expect("screen");
    assert_eq!(top_right, ScreenPoint::new(1000.0, 0.0));
}

#[test]
fn decimal_inverse_of_canvas_corner_is_exact() {
    let plot = decimal_plot("-20.00", "10.00", "80.00", "60.00");

    let point = plot
        .to_plot_coords(ScreenPoint::new(1000.0, 0.0))
        .expect("plot coords");
    assert_eq!(point.x, dec("80"));
    assert_eq!(point.y, dec("60"));
}

#[test]
fn decimal_corners_stay_on_canvas_after_zooming_far_out() {
    let mut plot = decimal_plot("0", "0", "100", "100");
    plot.set_canvas(Canvas::new(1000, 1000)).expect("resize");

    for _ in 0..40 {
        assert!(plot.wheel(-120.0, 500.0, 500.0).expect("zoom out"));
    }

    let area = plot.plot_area();
    assert!(area.width() > dec("100000"));
    let top_right = plot
        .to_screen_coords(DataPoint::new(area.right(), area.top()))
        .expect("screen");
    assert_eq!(top_right, ScreenPoint::new(1000.0, 0.0));
    let bottom_left = plot
        .to_screen_coords(DataPoint::new(area.left(), area.bottom()))
        .expect("screen");
    assert_eq!(bottom_left, ScreenPoint::new(0.0, 1000.0));
}

#[test]
fn float_round_trip_inside_area() {
    let plot = float_plot(800, 600, 7.0, 3.0);
    let original = DataPoint::new(2.345, 1.234);

    let screen = plot.to_screen_coords(original).expect("screen");
    let back = plot.to_plot_coords(screen).expect("plot");

    assert_relative_eq!(back.x, original.x, epsilon = 1e-9);
    assert_relative_eq!(back.y, original.y, epsilon = 1e-9);
}

#[test]
fn decimal_round_trip_inside_area() {
    let plot = decimal_plot("0.00", "0.00", "100.00", "50.00");
    let original = DataPoint::new(dec("12.34"), dec("5.67"));

    let screen = plot.to_screen_coords(original).expect("screen");
    let back = plot.to_plot_coords(screen).expect("plot");

    let tolerance = dec("0.000000001");
    assert!((back.x - original.x).abs() <= tolerance);
    assert!((back.y - original.y).abs() <= tolerance);
}

#[test]
fn canvas_resize_rederives_transform() {
    let mut plot = float_plot(100, 100, 10.0, 10.0);
    plot.set_changed(false);

    plot.set_canvas(Canvas::new(200, 50)).expect("resize");

    let top_right = plot.to_screen_coords(DataPoint::new(10.0, 10.0)).expect("screen");
    assert_relative_eq!(top_right.x, 200.0, epsilon = 1e-9);
    assert_relative_eq!(top_right.y, 0.0, epsilon = 1e-9);
    let bottom = plot.to_screen_coords(DataPoint::new(0.0, 0.0)).expect("screen");
    assert_relative_eq!(bottom.y, 50.0, epsilon = 1e-9);
    assert!(plot.is_changed());
}

#[test]
fn invalid_canvas_resize_keeps_previous_transform() {
    let mut plot = float_plot(100, 100, 10.0, 10.0);
    let before = *plot.transform();

    assert!(plot.set_canvas(Canvas::new(0, 100)).is_err());
    assert_eq!(*plot.transform(), before);
}

#[test]
fn set_plot_area_replaces_view() {
    let mut plot = float_plot(100, 100, 10.0, 10.0);
    let area = PlotArea::new(&FloatBackend, 10.0, 10.0, 20.0, 30.0).expect("area");

    plot.set_plot_area(area).expect("set area");

    assert_eq!(plot.plot_area(), area);
    let origin = plot.to_screen_coords(DataPoint::new(10.0, 10.0)).expect("screen");
    assert_relative_eq!(origin.x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(origin.y, 100.0, epsilon = 1e-9);
}

#[test]
fn plot_rejects_degenerate_initial_bounds() {
    let config = PlotConfig::new(Canvas::new(100, 100), 5.0, 0.0, 5.0, 1.0);
    assert!(Plot::new(NullSurface::default(), FloatBackend, config).is_err());
}
