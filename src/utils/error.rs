use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Missing or malformed caller input (400)
    Validation(String),
    /// Referenced user or recipe is absent (404)
    NotFound(String),
    /// Document store failure (500)
    Database(String),
    /// External API failure: network, status or malformed payload (500)
    Upstream(String),
}

impl AppError {
    /// Message sent back to the client in the `error` field
    pub fn message(&self) -> &str {
        match self {
            AppError::Validation(msg)
            | AppError::NotFound(msg)
            | AppError::Database(msg)
            | AppError::Upstream(msg) => msg,
        }
    }

    /// Logs the error with the handler context and hands it back, so that
    /// handlers can write `.map_err(|e| e.logged("..."))?`.
    pub fn logged(self, context: &str) -> Self {
        if self.status_code().is_server_error() {
            log::error!("❌ {}: {}", context, self);
        } else {
            log::warn!("⚠️  {}: {}", context, self);
        }
        self
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Invalid request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Database(msg) => write!(f, "Database error: {}", msg),
            AppError::Upstream(msg) => write!(f, "Upstream error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::Database(e.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for AppError {
    fn from(e: mongodb::bson::ser::Error) -> Self {
        AppError::Database(format!("Failed to encode document: {}", e))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.message()
        }))
    }
}
