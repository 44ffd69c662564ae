use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
};
use waitlist_types::{INVALID_EMAIL, JoinWaitlistRequest, JoinWaitlistResponse};

use crate::{
    adapters::http::{app_state::AppState, client_metadata::client_metadata},
    app_error::{AppError, AppResult},
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(join_waitlist))
}

/// POST /functions/v1/sync-to-sheets, POST /api/waitlist
///
/// The body is parsed by hand so an unreadable payload gets the same 400 as a
/// missing email, whatever the content type says.
pub async fn join_waitlist(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let payload: JoinWaitlistRequest = serde_json::from_slice(&body).map_err(|err| {
        tracing::debug!(error = %err, "Unreadable waitlist payload");
        AppError::InvalidInput(INVALID_EMAIL.into())
    })?;

    app_state
        .waitlist_use_cases
        .join(payload.email.as_deref(), client_metadata(&headers))
        .await?;

    Ok((StatusCode::CREATED, Json(JoinWaitlistResponse::joined())))
}
