//! Request handlers.
//!
//! All requests enter through [`dispatch`], which classifies the path and
//! hands off to the control, API or not-found handler.

use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::Response;

use crate::availability::{self, InstanceState, ToggleRequest};
use crate::http::request::request_id;
use crate::http::response::plain_text;
use crate::http::server::AppState;
use crate::routing::Route;

/// Single entry point for every request.
pub async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let route = state.router.classify(uri.path());

    tracing::debug!(
        request_id = %request_id(&headers),
        method = %method,
        path = %uri.path(),
        route = ?route,
        "Dispatching request"
    );

    if method != Method::GET {
        return unsupported_method(&method);
    }

    match route {
        Route::Control => control(&state.instance, uri.query()),
        Route::Api => api(&state.instance),
        Route::NotFound => not_found(),
    }
}

/// Toggle this instance when the call targets it. Always 200.
fn control(instance: &InstanceState, query: Option<&str>) -> Response {
    let request = ToggleRequest::from_query(query);
    let outcome = availability::apply(instance, &request);

    plain_text(StatusCode::OK, outcome.to_string())
}

/// 200 while active, 503 while inactive.
fn api(instance: &InstanceState) -> Response {
    if !instance.is_active() {
        tracing::debug!(identity = %instance.identity(), "Simulating failure");
        return plain_text(
            StatusCode::SERVICE_UNAVAILABLE,
            format!(
                "Server {} is marked INACTIVE, simulating failure.",
                instance.identity()
            ),
        );
    }

    plain_text(
        StatusCode::OK,
        format!("Response from server: {}", instance.identity()),
    )
}

fn not_found() -> Response {
    plain_text(StatusCode::NOT_FOUND, "Not Found")
}

fn unsupported_method(method: &Method) -> Response {
    plain_text(
        StatusCode::NOT_IMPLEMENTED,
        format!("Unsupported method ('{method}')"),
    )
}
