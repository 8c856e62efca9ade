//! HTTP entrypoint: `POST /api/import {url, allow_render?}`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use log::error;
use serde::{Deserialize, Serialize};

use crate::{import_with_config, ImportError, ImporterConfig, Recipe};

#[derive(Deserialize)]
struct ImportRequest {
    /// Absent and blank both count as missing input
    #[serde(default)]
    url: Option<String>,
    /// Per-request override of the configured render-fallback policy
    #[serde(default)]
    allow_render: Option<bool>,
}

#[derive(Serialize)]
struct ImportResponse {
    recipe: Recipe,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Clone)]
struct AppState {
    config: ImporterConfig,
}

/// Build the importer's HTTP application.
pub fn app(config: ImporterConfig) -> Router {
    Router::new()
        .route("/api/import", post(import_handler))
        .with_state(AppState { config })
}

async fn import_handler(
    State(state): State<AppState>,
    Json(request): Json<ImportRequest>,
) -> Result<Json<ImportResponse>, (StatusCode, Json<ErrorBody>)> {
    let url = request.url.as_deref().map(str::trim).unwrap_or_default();
    if url.is_empty() {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            ImportError::MissingInput.to_string(),
        ));
    }

    let mut config = state.config.clone();
    if let Some(allow_render) = request.allow_render {
        config.render_fallback = allow_render;
    }

    match import_with_config(url, &config).await {
        Ok(recipe) => Ok(Json(ImportResponse { recipe })),
        Err(e) => {
            error!("Import of {url} failed: {e}");
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                e.to_string(),
            ))
        }
    }
}

fn error_response(status: StatusCode, message: String) -> (StatusCode, Json<ErrorBody>) {
    (status, Json(ErrorBody { error: message }))
}
