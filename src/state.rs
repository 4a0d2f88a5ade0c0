//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! conversion core is stateless, so it only carries response policy.

use axum::http::StatusCode;

use crate::config::ServerConfig;

#[derive(Debug, Clone, Copy)]
pub struct AppState {
    /// Status sent alongside the `Invalid color` body.
    pub invalid_status: StatusCode,
}

impl AppState {
    #[must_use]
    pub fn new(config: &ServerConfig) -> Self {
        let invalid_status = if config.strict_status { StatusCode::BAD_REQUEST } else { StatusCode::OK };
        Self { invalid_status }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&ServerConfig::default())
    }
}
