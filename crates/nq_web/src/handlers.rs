use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::error;

use nq_core::{envelope, planner, Error, QueryFilter};

use crate::AppState;

/// Raw browser inputs. No format validation happens here; whatever the
/// query string carries is forwarded to the planner as-is.
#[derive(Debug, Default, Deserialize)]
pub struct NewsQuery {
    pub keyword: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

pub async fn index() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

pub async fn get_news(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NewsQuery>,
) -> (StatusCode, Json<Value>) {
    match fetch_news(&state, query).await {
        Ok(payload) => (StatusCode::OK, Json(payload)),
        Err(err) => {
            error!("news request failed: {}", err);
            error_response(err)
        }
    }
}

/// Plan, fetch and envelope-check a request; on success the upstream
/// payload is returned verbatim.
async fn fetch_news(state: &AppState, query: NewsQuery) -> nq_core::Result<Value> {
    let api_key = state.config.require_api_key()?;

    let filter = QueryFilter {
        keyword: query.keyword,
        from_date: query.from,
        to_date: query.to,
    };
    let selection = planner::plan(&filter, api_key);

    let payload = state.backend.fetch(&selection).await?;
    envelope::ensure_ok(&payload)?;
    Ok(payload)
}

/// Upstream-reported failures are the caller's fault (400); everything
/// else (missing key, transport, parse) is ours (500).
fn error_response(err: Error) -> (StatusCode, Json<Value>) {
    match err {
        Error::Api { message } => (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))),
        other => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": other.to_string() })),
        ),
    }
}
