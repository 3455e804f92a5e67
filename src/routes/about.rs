use axum::response::IntoResponse;

use crate::content::{MILESTONES, Milestone, OFFICES, Office};
use crate::template::{current_year, render};

#[derive(askama::Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub year: i32,
    pub active: &'static str,
    pub milestones: &'static [Milestone],
    pub offices: &'static [Office],
}

pub async fn page() -> impl IntoResponse {
    render(AboutTemplate {
        year: current_year(),
        active: "about",
        milestones: MILESTONES,
        offices: OFFICES,
    })
}
