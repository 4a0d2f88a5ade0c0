//! Color conversion route.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde::Deserialize;

use crate::color::{self, INVALID_COLOR};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ColorQuery {
    pub color: Option<String>,
}

/// `GET /?color=<value>` — plain-text `#rrggbb` or `Invalid color`.
///
/// A query string that fails to deserialize (for example a repeated `color`
/// key) is treated as a missing color rather than rejected.
pub async fn to_hex(
    State(state): State<AppState>,
    query: Result<Query<ColorQuery>, QueryRejection>,
) -> (StatusCode, String) {
    let params = match query {
        Ok(Query(params)) => params,
        Err(e) => {
            tracing::warn!(error = %e, "malformed color query");
            ColorQuery::default()
        }
    };

    let body = color::normalize(params.color.as_deref());
    let status = if body == INVALID_COLOR { state.invalid_status } else { StatusCode::OK };
    tracing::debug!(input = ?params.color, result = %body, "color request");

    (status, body)
}

#[cfg(test)]
#[path = "color_test.rs"]
mod tests;
