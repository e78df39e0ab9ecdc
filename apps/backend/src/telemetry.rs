use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "info,actix_web=info,sqlx=warn,sea_orm=warn";

/// `CROUPIER_LOG_FORMAT=pretty` switches to human-readable lines; anything
/// else keeps one JSON object per event.
fn pretty_requested() -> bool {
    std::env::var("CROUPIER_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("pretty"))
        .unwrap_or(false)
}

/// Install the global subscriber, filtered by `RUST_LOG`.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // Handler events carry the request span, and with it the trace id.
    let (json, pretty) = if pretty_requested() {
        (None, Some(fmt::layer().with_target(false).pretty()))
    } else {
        let layer = fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_target(false)
            .with_ansi(false);
        (Some(layer), None)
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json)
        .with(pretty)
        .init();
}
