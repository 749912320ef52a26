// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mtg_cards::render::NOT_IN_API;
use mtg_cards::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("{}", NOT_IN_API)]
    NotFound,
    #[error("Invalid request body: {0}")]
    Validation(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Store(e) => {
                let kind = if e.is_read() { "read" } else { "write" };
                tracing::error!("Card store {} failed: {}", kind, e);
                metrics::increment_counter!("mtg_cards_store_errors_total", "kind" => kind);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to {} card store: {}", kind, e),
                )
            }
            ApiError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
        };

        (status, message).into_response()
    }
}
