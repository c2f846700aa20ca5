/// Person API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use person_core::{PersonResponse, SavePersonRequest};
use person_storage::{persons, StorageError};

/// POST /save - Validate and persist a new person
///
/// The `Result` extractor keeps malformed-JSON rejections inside our JSON
/// error shape instead of axum's plain-text default.
pub async fn save_person(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<SavePersonRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PersonResponse>)> {
    let Json(request) =
        payload.map_err(|e| ServerError::BadRequest(format!("Invalid request: {e}")))?;

    let new_person = request
        .validate()
        .map_err(|e| ServerError::BadRequest(format!("Validation error: {e}")))?;

    let person = persons::create(&app_state.pool, &new_person)
        .await
        .map_err(|e| match e {
            StorageError::Conflict(_) => ServerError::Conflict(
                "Person with this external_id already exists".to_string(),
            ),
            e => {
                tracing::error!("Failed to create person: {e}");
                ServerError::Storage("Failed to save person".to_string())
            }
        })?;

    Ok((StatusCode::CREATED, Json(person.to_response())))
}

/// GET /:id - Fetch a person by internal id
pub async fn get_person(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<PersonResponse>> {
    let id = id
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ServerError::BadRequest("Invalid ID format".to_string()))?;

    let person = persons::get_by_id(&app_state.pool, id)
        .await
        .map_err(|e| match e {
            StorageError::NotFound { .. } => {
                ServerError::NotFound("Person not found".to_string())
            }
            e => {
                tracing::error!("Database error retrieving person {id}: {e}");
                ServerError::Storage("Failed to retrieve person".to_string())
            }
        })?;

    Ok(Json(person.to_response()))
}
