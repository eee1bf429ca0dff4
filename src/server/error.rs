use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::i18n::{Language, PoeticError, format_error_message};

/// A request failure carrying the category, the UI language, and the
/// HTTP status. The wire body keeps the stable `code` for clients while
/// the `error` text stays child-friendly and localized.
#[derive(Debug, thiserror::Error)]
#[error("{}", .kind.code())]
pub struct ApiError {
    kind: PoeticError,
    language: Language,
    status: StatusCode,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
}

impl ApiError {
    /// The requested place could not be resolved to coordinates.
    pub fn location(language: Language) -> Self {
        Self {
            kind: PoeticError::Location,
            language,
            status: StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(code = self.kind.code(), status = %self.status, "Request failed");
        let body = Json(ErrorBody {
            error: format_error_message(self.kind, self.language),
            code: self.kind.code(),
        });
        (self.status, body).into_response()
    }
}
