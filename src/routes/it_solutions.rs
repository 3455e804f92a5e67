use axum::response::IntoResponse;

use crate::content::{DESIGN_SERVICES, IT_SERVICES, ItService, MOBILE_FEATURES, WEB_FEATURES};
use crate::template::{current_year, render};

#[derive(askama::Template)]
#[template(path = "it_solutions.html")]
pub struct ItSolutionsTemplate {
    pub year: i32,
    pub active: &'static str,
    pub services: &'static [ItService],
}

pub async fn page() -> impl IntoResponse {
    render(ItSolutionsTemplate {
        year: current_year(),
        active: "it-solutions",
        services: IT_SERVICES,
    })
}

#[derive(askama::Template)]
#[template(path = "feature_page.html")]
pub struct FeaturePageTemplate {
    pub year: i32,
    pub active: &'static str,
    pub heading: &'static str,
    pub lede: &'static str,
    pub features: &'static [&'static str],
}

pub async fn mobile_app() -> impl IntoResponse {
    render(FeaturePageTemplate {
        year: current_year(),
        active: "it-solutions",
        heading: "Mobile App Development",
        lede: "Native iOS & Android apps with exceptional user experiences.",
        features: MOBILE_FEATURES,
    })
}

pub async fn web_app() -> impl IntoResponse {
    render(FeaturePageTemplate {
        year: current_year(),
        active: "it-solutions",
        heading: "Web App Development",
        lede: "Scalable web solutions built with modern frameworks and cloud architecture.",
        features: WEB_FEATURES,
    })
}

pub async fn graphic_design() -> impl IntoResponse {
    render(FeaturePageTemplate {
        year: current_year(),
        active: "it-solutions",
        heading: "Graphic Design Services",
        lede: "Creative design that makes your brand stand out.",
        features: DESIGN_SERVICES,
    })
}
