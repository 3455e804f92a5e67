use axum::{extract::State, http::header, response::IntoResponse};

use crate::content::SITE_ROUTES;
use crate::routes::AppState;

/// GET /sitemap.xml - static enumeration of the content routes.
pub async fn xml(State(state): State<AppState>) -> impl IntoResponse {
    let base = state.config.site.base_url.trim_end_matches('/');

    let mut body = String::from(concat!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
        "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    ));
    for route in SITE_ROUTES {
        body.push_str(&format!("  <url><loc>{base}{route}</loc></url>\n"));
    }
    body.push_str("</urlset>\n");

    ([(header::CONTENT_TYPE, "application/xml")], body)
}
