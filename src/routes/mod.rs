use std::sync::Arc;

use axum::{
    Router,
    extract::FromRef,
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::cookie::Key;
use globaltrade_notification::{
    ApiMailer, ApiSettings, CompanyProfile, Dispatcher, SmtpMailer, SmtpSettings,
};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::config::{Config, SelectedTransport};

mod about;
mod blog;
mod contact;
mod demo_api;
mod health;
mod import_export;
mod index;
mod it_solutions;
mod services;
mod sitemap;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub dispatcher: Arc<Dispatcher>,
    cookie_key: Key,
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Key {
        state.cookie_key.clone()
    }
}

impl AppState {
    pub fn from_config(config: Config) -> Self {
        let dispatcher = Arc::new(build_dispatcher(&config));

        // Per-boot random key when no secret is configured, matching the
        // reference deployment.
        let cookie_key = if config.session.secret.is_empty() {
            Key::generate()
        } else {
            Key::derive_from(config.session.secret.as_bytes())
        };

        Self {
            config,
            dispatcher,
            cookie_key,
        }
    }
}

/// Pick the notification transport from configuration.
///
/// A missing or unusable credential downgrades to the disabled dispatcher:
/// leads are still accepted, notification delivery is skipped. Startup never
/// fails over email configuration.
fn build_dispatcher(config: &Config) -> Dispatcher {
    let profile = CompanyProfile::default();
    let email = &config.email;
    let business = email.business_address.clone();

    match email.selected_transport() {
        SelectedTransport::Api => {
            let settings = ApiSettings {
                base_url: email.api.base_url.clone(),
                api_key: email.api.api_key.clone(),
            };
            match ApiMailer::new(settings, email.from_address.clone()) {
                Ok(mailer) => {
                    tracing::info!(base_url = %email.api.base_url, "Email transport: HTTP API");
                    Dispatcher::new(Arc::new(mailer), profile, business)
                }
                Err(err) => {
                    tracing::error!(error = %err, "Email API client unusable, notifications disabled");
                    Dispatcher::disabled(profile, business)
                }
            }
        }
        SelectedTransport::Smtp => {
            let settings = SmtpSettings {
                host: email.smtp.host.clone(),
                port: email.smtp.port,
                username: email.smtp.username.clone(),
                password: email.smtp.password.clone(),
            };
            let from = format!("{} <{}>", email.from_name, email.from_address);
            let mailer = from
                .parse()
                .map_err(anyhow::Error::from)
                .and_then(|from| SmtpMailer::new(&settings, from).map_err(anyhow::Error::from));
            match mailer {
                Ok(mailer) => {
                    tracing::info!(host = %email.smtp.host, port = email.smtp.port, "Email transport: SMTP relay");
                    Dispatcher::new(Arc::new(mailer), profile, business)
                }
                Err(err) => {
                    tracing::error!(error = %err, "SMTP transport unusable, notifications disabled");
                    Dispatcher::disabled(profile, business)
                }
            }
        }
        SelectedTransport::None => {
            tracing::warn!("No email credentials configured, leads will be recorded without notification");
            Dispatcher::disabled(profile, business)
        }
    }
}

pub async fn fallback() -> impl IntoResponse {
    crate::error::AppError::NotFound
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(index::page))
        .route("/about", get(about::page))
        .route("/services", get(services::page))
        .route("/company-management", get(services::company_management))
        .route("/general-services", get(services::general_services))
        .route("/it-solutions", get(it_solutions::page))
        .route("/mobile-app-development", get(it_solutions::mobile_app))
        .route("/web-application-development", get(it_solutions::web_app))
        .route("/graphic-design", get(it_solutions::graphic_design))
        .route("/import-export", get(import_export::page))
        .route("/blog", get(blog::index))
        .route("/blog/{slug}", get(blog::post))
        .route("/contact", get(contact::page).post(contact::action))
        .route("/api/send-demo-confirmation", post(demo_api::action))
        .route("/health", get(health::health))
        .route("/sitemap.xml", get(sitemap::xml))
        .fallback(fallback)
        .nest_service("/static", crate::assets::AssetsService::new())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
