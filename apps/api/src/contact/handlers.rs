use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::contact::{ContactRequest, MessageResponse};
use crate::state::AppState;

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";
pub const SENT_MESSAGE: &str = "Message sent successfully";

/// POST /api/contact
///
/// Presence-checks name/email/message and hands the message to the
/// configured sink. Nothing is stored.
pub async fn handle_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected contact payload: {rejection}");
        AppError::Validation(INVALID_BODY_MESSAGE.to_string())
    })?;

    let submission = request.into_submission().map_err(|missing| {
        let fields: Vec<_> = missing.iter().map(|f| f.as_str()).collect();
        warn!("Contact form missing fields: {}", fields.join(", "));
        AppError::Validation(MISSING_FIELDS_MESSAGE.to_string())
    })?;

    state
        .contact_sink
        .deliver(&submission)
        .await
        .map_err(AppError::Delivery)?;

    info!(
        id = %submission.id,
        backend = state.contact_sink.backend(),
        "Contact message accepted"
    );
    Ok(Json(MessageResponse::new(SENT_MESSAGE)))
}
