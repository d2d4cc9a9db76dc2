//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// # Logging Behavior
///
/// **On Request:**
/// - Opens a span at `INFO` level with the HTTP method, URI and version
/// - Logs the start of the request at `DEBUG`
///
/// **On Response:**
/// - Logs at `INFO` level with the status code and latency in milliseconds
/// - Catalog misses are ordinary 404 responses and stay at `INFO`
///
/// **On Failure:**
/// - 5xx responses are logged again at `ERROR` with their latency
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET uri=/compare/solar/wind version=HTTP/1.1}: finished processing request latency=0 ms status=200
/// INFO request{method=GET uri=/energy/coal version=HTTP/1.1}: finished processing request latency=0 ms status=404
/// ```
///
/// # Integration
///
/// ```rust,ignore
/// let app = api::routes::public_routes()
///     .with_state(state)
///     .layer(tracing::layer());
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}
