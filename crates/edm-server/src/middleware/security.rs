//! Response headers for a JSON API that is never framed or sniffed.
//!
//! Nothing served here is HTML, so the policy denies every fetch except
//! same-origin API calls and the session socket.

use axum::Router;
use axum::http::HeaderValue;
use axum::http::header::HeaderName;
use tower_http::set_header::SetResponseHeaderLayer;

/// Content-Security-Policy header value.
const CSP: &str = "default-src 'none'; \
                   connect-src 'self' ws: wss:; \
                   frame-ancestors 'none'";

/// Headers set on every response, overriding handler values.
const HEADERS: [(&str, &str); 3] = [
    ("content-security-policy", CSP),
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "DENY"),
];

/// Wrap `router` so every response carries [`HEADERS`].
pub(crate) fn with_security_headers<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    HEADERS.iter().fold(router, |router, &(name, value)| {
        router.layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        ))
    })
}
