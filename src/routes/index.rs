use axum::{extract::State, response::IntoResponse};
use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};

use crate::content::{FEATURED_SERVICES, FeaturedService};
use crate::routes::AppState;
use crate::template::{current_year, render};

const VISITS_COOKIE: &str = "visits";

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub year: i32,
    pub active: &'static str,
    pub featured: &'static [FeaturedService],
}

pub async fn page(State(state): State<AppState>, jar: SignedCookieJar) -> impl IntoResponse {
    // Best-effort visit counter; a lost update under concurrent requests
    // from the same visitor is acceptable.
    let visits = jar
        .get(VISITS_COOKIE)
        .and_then(|cookie| cookie.value().parse::<u64>().ok())
        .unwrap_or(0)
        .saturating_add(1);

    let cookie = Cookie::build((VISITS_COOKIE, visits.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.config.session.secure_cookies)
        .build();

    (
        jar.add(cookie),
        render(IndexTemplate {
            year: current_year(),
            active: "home",
            featured: FEATURED_SERVICES,
        }),
    )
}
