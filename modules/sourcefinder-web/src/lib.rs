use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{RawQuery, State},
    http::{header, HeaderValue},
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::info;
use url::form_urlencoded;

use sourcefinder_common::SourcesResponse;
use sourcefinder_sources::{lookup, MatchMode};

pub mod templates;
use templates::render_index;

// --- App State ---

pub struct AppState {
    pub mode: MatchMode,
}

// --- Router ---

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page).post(submit_topic))
        .route("/api/sources", get(api_sources))
        .with_state(Arc::new(state))
        // Topics are never cached or stored
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        // Method + path only; topics stay out of request logs
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}

// --- Handlers ---

/// First `topic` value in a urlencoded payload; missing or unreadable input is "".
/// Content type and repeated fields are not enforced, so every submission renders.
fn topic_field(encoded: &[u8]) -> String {
    form_urlencoded::parse(encoded)
        .find(|(key, _)| key == "topic")
        .map(|(_, value)| value.trim().to_string())
        .unwrap_or_default()
}

async fn index_page() -> impl IntoResponse {
    Html(render_index("", "", &[]))
}

async fn submit_topic(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> impl IntoResponse {
    let topic = topic_field(&body);
    let result = lookup(&topic, state.mode);

    info!(
        question = result.is_question(),
        count = result.sources().len(),
        "Topic submitted"
    );

    Html(render_index(
        &topic,
        result.warning().unwrap_or_default(),
        result.sources(),
    ))
}

async fn api_sources(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> impl IntoResponse {
    let topic = topic_field(query.unwrap_or_default().as_bytes());
    let result = lookup(&topic, state.mode);
    Json(SourcesResponse::new(&topic, &result))
}
