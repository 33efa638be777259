use crate::error::SessionError;
use crate::model::{EntryUpdate, Navigation, PendingEntry, RecordView};
use crate::state::AppState;
use crate::utils::{api_error, internal_error, ApiError};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

pub async fn list_entries(
    State(state): State<AppState>,
) -> Result<Json<Vec<PendingEntry>>, ApiError> {
    let session = state.session()?;
    Ok(Json(session.pending_entries().to_vec()))
}

pub async fn add_entry(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<PendingEntry>>), ApiError> {
    let mut session = state.session()?;
    session.add_pending_entry().map_err(session_error)?;
    Ok((StatusCode::CREATED, Json(session.pending_entries().to_vec())))
}

pub async fn update_entry(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(update): Json<EntryUpdate>,
) -> Result<Json<PendingEntry>, ApiError> {
    let mut session = state.session()?;
    let entry = session
        .update_entry(index, update.field, update.value)
        .map_err(session_error)?;
    Ok(Json(entry.clone()))
}

pub async fn shorten(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<RecordView>>), ApiError> {
    let mut session = state.session()?;
    let created = session.submit().map_err(session_error)?;
    let views = created
        .iter()
        .map(|record| record.view(&state.short_url_prefix))
        .collect();
    Ok((StatusCode::CREATED, Json(views)))
}

pub async fn list_links(State(state): State<AppState>) -> Result<Json<Vec<RecordView>>, ApiError> {
    let session = state.session()?;
    let views = session
        .records()
        .iter()
        .map(|record| record.view(&state.short_url_prefix))
        .collect();
    Ok(Json(views))
}

pub async fn click_link(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<Navigation>, ApiError> {
    let mut session = state.session()?;
    let navigation = session.click_short_url(index).map_err(session_error)?;
    Ok(Json(navigation))
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

fn session_error(err: SessionError) -> ApiError {
    match err {
        SessionError::TooManyEntries(_) => api_error(StatusCode::CONFLICT, err),
        SessionError::EntryNotFound(_) | SessionError::LinkNotFound(_) => {
            api_error(StatusCode::NOT_FOUND, err)
        }
        SessionError::Expired {
            ref shortcode,
            expired_at,
        } => (
            StatusCode::GONE,
            Json(json!({
                "error": err.to_string(),
                "shortcode": shortcode,
                "expiredAt": expired_at,
            })),
        ),
        SessionError::InvalidEntries(ref errors) => {
            let errors: Vec<String> = errors
                .iter()
                .map(|error| error.map(|e| e.to_string()).unwrap_or_default())
                .collect();
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": err.to_string(), "errors": errors })),
            )
        }
        SessionError::Generation(_) => internal_error(err),
    }
}
