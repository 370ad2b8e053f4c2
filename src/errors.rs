use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

/// Error taxonomy for the generation pipeline and the HTTP surface.
///
/// Persistence failures are deliberately absent: history writes are
/// fire-and-forget and only ever logged (see `generate_handlers`).
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad user input, recoverable; the message is shown inline.
    #[error("{0}")]
    Validation(String),

    /// Logo type/size rejection, raised before the file bytes are read.
    #[error("{0}")]
    FileInput(String),

    /// Encoding or rasterization failure. The user-facing message is
    /// fixed; the underlying cause only goes to the log.
    #[error("Failed to generate QR code")]
    Render(#[source] anyhow::Error),

    #[error("{0}")]
    NotFound(String),

    /// Database failure on a read/delete path. Write failures during
    /// generation never surface here.
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::FileInput(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Render(_) | ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Render(source) = self {
            log::error!("QR rendering failed: {:#}", source);
        }
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }
}
