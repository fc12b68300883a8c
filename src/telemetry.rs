//! Opt-in `tracing` subscriber for hosts that do not install their own.
//!
//! The crate emits these events:
//!
//! | Target | Level | Event |
//! |---|---|---|
//! | `sparkline_rs::api::plan` | `debug` | degenerate scale range, series drawn flat (`lo`, `hi`, `policy`) |
//! | `sparkline_rs::api::plan` | `trace` | draw plan assembled (`count`, `segment_width`, marker counts) |
//! | `sparkline_rs::api::engine` | `trace` | frame about to be rendered (`width`, `height`, `commands`) |
//! | `sparkline_rs::api::engine` | `debug` | frame rendered (`lines`, `rects`) |
//! | `sparkline_rs::api::engine` | `warn` | renderer rejected the frame (`error`) |
//!
//! Only the `warn` event passes the default `info` filter. Set
//! `RUST_LOG=sparkline_rs=debug` (or `trace`) to see the rest.

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`, or `info` when unset.
///
/// Returns `false` when the `telemetry` feature is disabled or when the host
/// already set a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
