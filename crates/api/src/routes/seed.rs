//! Handler for the `/seed` bulk-replace endpoint.

use axum::extract::State;
use axum::{routing::post, Json, Router};
use serde_json::Value;
use unipath_db::models::school::SeedSchool;
use unipath_db::repositories::SchoolRepo;

use crate::error::{AppError, AppResult};
use crate::response::SeedResponse;
use crate::state::AppState;

/// POST /api/v1/seed
///
/// Accepts a single school document or an array and fully replaces the
/// collection (delete-all + insert-all). There are no upsert semantics:
/// reseeding with an empty array leaves the collection empty.
pub async fn seed(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<Json<SeedResponse>> {
    let documents = match body {
        Value::Array(items) => items,
        Value::Object(obj) if obj.contains_key("school_id") => vec![Value::Object(obj)],
        _ => {
            return Err(AppError::BadRequest(
                "Invalid data format. Expected array or single object.".to_string(),
            ))
        }
    };

    let schools: Vec<SeedSchool> = serde_json::from_value(Value::Array(documents))
        .map_err(|err| AppError::BadRequest(format!("Invalid school document: {err}")))?;

    let count = SchoolRepo::replace_all(&state.pool, &schools).await?;

    // The cached filter metadata describes the old collection.
    state.metadata_cache.invalidate().await;

    Ok(Json(SeedResponse {
        count,
        status: "success",
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/seed", post(seed))
}
