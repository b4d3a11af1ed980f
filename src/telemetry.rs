//! Opt-in `tracing` setup for hosts embedding `plot-rs`.
//!
//! Every event is emitted from a module under [`LOG_TARGET`]:
//! - `plot_rs::api::navigation_controller` warns on rejected pans and zooms and
//!   traces ignored pointer events.
//! - `plot_rs::api::render_pipeline` warns on failed render passes.
//! - `plot_rs::api::plot` and `plot_rs::api::series_registry` log view and
//!   series changes at `debug`.
//!
//! Hosts with their own subscriber can filter on those targets directly.

/// Root target of every event this crate emits.
pub const LOG_TARGET: &str = "plot_rs";

/// Directives used when `RUST_LOG` is unset: plot events at `debug`, other
/// crates at `warn`.
pub const DEFAULT_FILTER: &str = "warn,plot_rs=debug";

/// Installs a compact subscriber filtered by `RUST_LOG`, or by
/// [`DEFAULT_FILTER`] when it is unset.
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));
        return install(filter);
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

/// Installs a compact subscriber with explicit filter directives, ignoring
/// `RUST_LOG`. Invalid directives install nothing and return `false`.
#[must_use]
pub fn init_tracing_with_filter(directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        return match tracing_subscriber::EnvFilter::try_new(directives) {
            Ok(filter) => install(filter),
            Err(_) => false,
        };
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directives;
        false
    }
}

#[cfg(feature = "telemetry")]
fn install(filter: tracing_subscriber::EnvFilter) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .is_ok()
}
