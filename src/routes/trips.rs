// src/routes/trips.rs
use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

use crate::{error::AppError, state::SharedState};

/// Stores a trip document under its caller-supplied id, overwriting any
/// previous version. The document is opaque beyond the id field.
pub async fn save_trip_handler(
    State(state): State<SharedState>,
    Json(trip): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let id = trip
        .get("id")
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or("");
    if id.is_empty() {
        return Err(AppError::BadRequest("trip with id required".to_string()));
    }

    let path = state.trips.put(id, &trip).await?;
    tracing::info!(%id, "trip saved");

    let mut body = json!({ "ok": true });
    if let Some(path) = path {
        body["path"] = json!(path);
    }
    Ok(Json(body))
}

pub async fn load_trip_handler(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let trip = state.trips.get(&id).await?;
    Ok(Json(trip))
}
