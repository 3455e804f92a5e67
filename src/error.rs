use axum::{http::StatusCode, response::{IntoResponse, Response}};
use thiserror::Error;

use crate::template::{NotFoundTemplate, ServerErrorTemplate, render_with_status};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("page not found")]
    NotFound,

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => {
                render_with_status(StatusCode::NOT_FOUND, NotFoundTemplate::default())
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {detail}");
                render_with_status(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ServerErrorTemplate::default(),
                )
            }
        }
    }
}
