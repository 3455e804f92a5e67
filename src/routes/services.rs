use axum::response::IntoResponse;

use crate::content::{
    COMPANY_MANAGEMENT_SERVICES, GENERAL_SERVICE_GROUPS, GeneralServiceGroup, SERVICE_CATEGORIES,
    ServiceCategory,
};
use crate::template::{current_year, render};

#[derive(askama::Template)]
#[template(path = "services.html")]
pub struct ServicesTemplate {
    pub year: i32,
    pub active: &'static str,
    pub categories: &'static [ServiceCategory],
}

pub async fn page() -> impl IntoResponse {
    render(ServicesTemplate {
        year: current_year(),
        active: "services",
        categories: SERVICE_CATEGORIES,
    })
}

#[derive(askama::Template)]
#[template(path = "company_management.html")]
pub struct CompanyManagementTemplate {
    pub year: i32,
    pub active: &'static str,
    pub services: &'static [&'static str],
}

pub async fn company_management() -> impl IntoResponse {
    render(CompanyManagementTemplate {
        year: current_year(),
        active: "services",
        services: COMPANY_MANAGEMENT_SERVICES,
    })
}

#[derive(askama::Template)]
#[template(path = "general_services.html")]
pub struct GeneralServicesTemplate {
    pub year: i32,
    pub active: &'static str,
    pub groups: &'static [GeneralServiceGroup],
}

pub async fn general_services() -> impl IntoResponse {
    render(GeneralServicesTemplate {
        year: current_year(),
        active: "services",
        groups: GENERAL_SERVICE_GROUPS,
    })
}
