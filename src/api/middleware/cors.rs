//! Cross-origin resource sharing middleware.

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::config::CorsOrigins;

/// Creates the CORS layer for the configured origins.
///
/// # Behavior
///
/// - [`CorsOrigins::Any`]: the request `Origin` is mirrored back, so browsers
///   accept credentialed requests from any site
/// - [`CorsOrigins::List`]: only the listed origins are allowed
///
/// Credentials are always allowed. The requested method and headers of a
/// preflight are mirrored, since a literal `*` cannot be combined with
/// credentials. Methods the router does not serve still answer 405.
///
/// Origins that are not valid header values are skipped; [`crate::config::Config::validate`]
/// rejects them before the server starts.
pub fn layer(origins: &CorsOrigins) -> CorsLayer {
    let allow_origin = match origins {
        CorsOrigins::Any => AllowOrigin::mirror_request(),
        CorsOrigins::List(list) => AllowOrigin::list(
            list.iter()
                .filter_map(|origin| HeaderValue::from_str(origin).ok()),
        ),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
