use axum::response::IntoResponse;

use crate::content::{LOGISTICS_SERVICES, LogisticsService, TRADE_ROUTES, TradeRoute};
use crate::template::{current_year, render};

#[derive(askama::Template)]
#[template(path = "import_export.html")]
pub struct ImportExportTemplate {
    pub year: i32,
    pub active: &'static str,
    pub routes: &'static [TradeRoute],
    pub services: &'static [LogisticsService],
}

pub async fn page() -> impl IntoResponse {
    render(ImportExportTemplate {
        year: current_year(),
        active: "import-export",
        routes: TRADE_ROUTES,
        services: LOGISTICS_SERVICES,
    })
}
