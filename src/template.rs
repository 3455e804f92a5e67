use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use time::OffsetDateTime;

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

/// Year stamped into every page footer.
pub fn current_year() -> i32 {
    OffsetDateTime::now_utc().year()
}

/// Render a template into a 200 response, degrading to a plain 500 if
/// rendering itself fails.
pub fn render<T: Template>(template: T) -> Response {
    render_with_status(StatusCode::OK, template)
}

pub fn render_with_status<T: Template>(status: StatusCode, template: T) -> Response {
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            tracing::error!("Failed to render template: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response()
        }
    }
}

#[derive(Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub year: i32,
    pub active: &'static str,
}

impl Default for NotFoundTemplate {
    fn default() -> Self {
        Self {
            year: current_year(),
            active: "",
        }
    }
}

#[derive(Template)]
#[template(path = "500.html")]
pub struct ServerErrorTemplate {
    pub year: i32,
    pub active: &'static str,
}

impl Default for ServerErrorTemplate {
    fn default() -> Self {
        Self {
            year: current_year(),
            active: "",
        }
    }
}
