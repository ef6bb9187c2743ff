use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug)]
pub enum Error {
    Database,
    UnknownCollection(String),
    InvalidDocument(String),
    Body(JsonRejection),
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {}", err);
        Error::Database
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::Body(rejection)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Error::Database => (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string()),
            Error::UnknownCollection(name) => {
                (StatusCode::NOT_FOUND, format!("Unknown collection: {}", name))
            }
            Error::InvalidDocument(reason) => (StatusCode::BAD_REQUEST, reason),
            Error::Body(rejection) => (rejection.status(), rejection.body_text()),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
