use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use globaltrade_contact::ContactFields;
use serde::Serialize;

use crate::routes::AppState;

#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            error: None,
        }
    }

    fn err(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }
}

/// POST /api/send-demo-confirmation
///
/// 200 on delivery or soft-skip, 400 on invalid input, 500 only for the
/// SMTP credential rejection and for unexpected failures.
pub async fn action(State(state): State<AppState>, Json(fields): Json<ContactFields>) -> Response {
    let request = match fields.into_request() {
        Ok(request) => request,
        Err(errors) => {
            let error = if errors.iter().any(|e| e.field == "email") {
                "Invalid email".to_owned()
            } else {
                errors
                    .iter()
                    .map(|e| e.message.as_str())
                    .collect::<Vec<_>>()
                    .join("; ")
            };
            return (StatusCode::BAD_REQUEST, Json(ApiResponse::err(error))).into_response();
        }
    };

    match state.dispatcher.dispatch(&request).await {
        Ok(report) if report.auth_failure() => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::err("Email service authentication failed")),
        )
            .into_response(),
        Ok(report) if report.skipped() => (
            StatusCode::OK,
            Json(ApiResponse::ok("Demo request recorded")),
        )
            .into_response(),
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::ok("Demo confirmation sent")),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Demo confirmation dispatch failed unexpectedly");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::err("An unexpected error occurred")),
            )
                .into_response()
        }
    }
}
