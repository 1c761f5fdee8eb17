// Axum API Server Module
//
// Purpose: read-only REST API over the crop reference store

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::details::{generate_details_data, DetailsGenerator};
use crate::store::{CropEntry, CropStore};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CropStore>,
    pub details: Arc<DetailsGenerator>,
}

impl AppState {
    /// Build state around the built-in crop catalog.
    pub fn new() -> anyhow::Result<Self> {
        tracing::info!("Building crop reference store...");
        let store = CropStore::builtin()?;
        tracing::info!("Loaded {} crops", store.len());

        Ok(Self::with_store(store))
    }

    pub fn with_store(store: CropStore) -> Self {
        Self {
            store: Arc::new(store),
            details: Arc::new(DetailsGenerator::new()),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Crop endpoints (JSON API)
        .route("/api/crops", get(list_crops))
        .route("/api/crops/:name", get(get_crop))
        .route("/api/crops/:name/details", get(get_crop_details))

        // Markdown article
        .route("/api/crops/:name/markdown", get(get_crop_markdown))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "crops": state.store.len(),
    }))
}

/// Crop names in catalog order (for selection controls)
async fn list_crops(State(state): State<AppState>) -> Json<serde_json::Value> {
    let names: Vec<&str> = state.store.names().collect();
    Json(serde_json::json!({
        "rows": names.len(),
        "data": names,
    }))
}

async fn get_crop(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    tracing::debug!("Fetching crop {}", name);
    let record = state
        .store
        .lookup(&name)
        .ok_or_else(|| AppError::NotFound(format!("Crop {} not found", name)))?;

    let entry = CropEntry { name: &name, record };
    let body = serde_json::to_value(&entry).map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(Json(body))
}

async fn get_crop_details(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    tracing::debug!("Generating details view for {}", name);
    let record = state
        .store
        .lookup(&name)
        .ok_or_else(|| AppError::NotFound(format!("Crop {} not found", name)))?;

    let view = generate_details_data(&name, record, Some(&state.store));
    let body = serde_json::to_value(&view).map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(Json(body))
}

async fn get_crop_markdown(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let record = state
        .store
        .lookup(&name)
        .ok_or_else(|| AppError::NotFound(format!("Crop {} not found", name)))?;

    let markdown = state.details.generate(&name, record, Some(&state.store));
    Ok((
        [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
        markdown,
    ))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum AppError {
    Internal(String),
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
