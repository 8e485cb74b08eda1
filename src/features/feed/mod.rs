use crate::domain::ContentKind;
use crate::feed::render_feed;
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use chrono::{Local, SecondsFormat};
use serde::Deserialize;

pub fn feed_router() -> Router<AppState> {
    Router::new()
        .route("/", get(serve_feed_handler))
        .route("/reload", get(reload_handler))
}

#[derive(Deserialize)]
pub struct FeedQuery {
    // `type=html` selects the HTML-content variant; anything else is plain
    #[serde(rename = "type")]
    variant: Option<String>,
}

async fn serve_feed_handler(
    State(state): State<AppState>,
    Query(query): Query<FeedQuery>,
) -> Response {
    let kind = match query.variant.as_deref() {
        Some("html") => ContentKind::Html,
        _ => ContentKind::Plain,
    };

    let entries = match state.feed_service.entries(kind).await {
        Ok(entries) => entries,
        Err(e) => return internal_error(e),
    };

    let updated = Local::now().to_rfc3339_opts(SecondsFormat::Secs, false);

    match render_feed(&entries, &updated) {
        Ok(xml) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/xml")],
            xml,
        )
            .into_response(),
        Err(e) => internal_error(e),
    }
}

async fn reload_handler(State(state): State<AppState>) -> Response {
    match state.feed_service.reload().await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => internal_error(e),
    }
}

// blanket 500: the detail goes to the server log, never to the client
fn internal_error(err: anyhow::Error) -> Response {
    eprintln!("Request failed: {:#}", err);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        "Internal Server Error",
    )
        .into_response()
}
