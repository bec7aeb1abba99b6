use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::resume::{content_disposition, load_resume, ResumeAsset, PLACEHOLDER_PDF};
use crate::state::AppState;

fn pdf_response(body: Bytes, filename: &str) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, content_disposition(filename)),
        ],
        body,
    )
        .into_response()
}

/// GET /api/resume/download
///
/// A missing file yields the placeholder with 200 unless the fallback is
/// disabled, in which case it is a 404.
pub async fn handle_resume_download(State(state): State<AppState>) -> Result<Response, AppError> {
    let config = &state.config;

    match load_resume(&config.resume_path).await? {
        ResumeAsset::File(contents) => {
            debug!(
                "Serving resume {} ({} bytes)",
                config.resume_path.display(),
                contents.len()
            );
            Ok(pdf_response(contents, &config.resume_filename))
        }
        ResumeAsset::Missing if config.resume_placeholder => {
            warn!(
                "Resume file {} not found, serving placeholder",
                config.resume_path.display()
            );
            Ok(pdf_response(
                Bytes::from_static(PLACEHOLDER_PDF),
                &config.resume_filename,
            ))
        }
        ResumeAsset::Missing => Err(AppError::NotFound("Resume is not available".to_string())),
    }
}
