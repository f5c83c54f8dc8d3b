//! Operational HTTP endpoints.
//!
//! - `/`        : landing page linking to the metrics path
//! - `/healthz` : liveness
//! - metrics path (default `/metrics`) : Prometheus text format

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};

use crate::app_state::AppState;
use crate::obs::metrics::TEXT_FORMAT;

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn landing(State(state): State<AppState>) -> Html<String> {
    Html(format!(
        "<html>\n\
         <head><title>Browserless Exporter</title></head>\n\
         <body>\n\
         <h1>Browserless Exporter</h1>\n\
         <p><a href=\"{path}\">Metrics</a></p>\n\
         </body>\n\
         </html>\n",
        path = state.cfg().metrics_path
    ))
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let body = state.registry().gather().await;

    (StatusCode::OK, [(header::CONTENT_TYPE, TEXT_FORMAT)], body).into_response()
}
