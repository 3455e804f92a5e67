use axum::{
    extract::{Form, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use globaltrade_contact::ContactFields;

use crate::content::SERVICES_DROPDOWN;
use crate::routes::AppState;
use crate::template::{current_year, render};

const FLASH_COOKIE: &str = "flash";

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub year: i32,
    pub active: &'static str,
    pub services: &'static [&'static str],
    pub errors: Vec<String>,
    pub flash: Option<String>,
    pub fields: ContactFields,
}

impl ContactTemplate {
    /// Keeps the visitor's dropdown choice across a redisplay.
    fn service_selected(&self, service: &str) -> bool {
        self.fields.service == service
    }

    fn blank(flash: Option<String>) -> Self {
        Self {
            year: current_year(),
            active: "contact",
            services: SERVICES_DROPDOWN,
            errors: Vec::new(),
            flash,
            fields: ContactFields::default(),
        }
    }
}

pub async fn page(jar: SignedCookieJar) -> impl IntoResponse {
    let flash = jar
        .get(FLASH_COOKIE)
        .map(|cookie| cookie.value().to_owned());
    let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/").build());

    (jar, render(ContactTemplate::blank(flash)))
}

pub async fn action(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(fields): Form<ContactFields>,
) -> Response {
    let request = match fields.clone().into_request() {
        Ok(request) => request,
        Err(errors) => {
            // Reference behavior: redisplay the form at 200 with the error
            // list and the visitor's input kept.
            return render(ContactTemplate {
                errors: errors.into_iter().map(|e| e.message).collect(),
                fields,
                ..ContactTemplate::blank(None)
            });
        }
    };

    tracing::info!(
        name = %request.name,
        email = %request.email,
        service = %request.service,
        "Contact form submitted"
    );

    // Structural validity decides the response; delivery failure is logged
    // by the dispatcher and never shown to the submitter on this route.
    if let Err(err) = state.dispatcher.dispatch(&request).await {
        tracing::error!(error = %err, "Could not compose contact notifications");
    }

    let flash = Cookie::build((
        FLASH_COOKIE,
        format!(
            "Thank you {}! Our team will contact you shortly regarding your inquiry.",
            request.name
        ),
    ))
    .path("/")
    .http_only(true)
    .same_site(SameSite::Lax)
    .secure(state.config.session.secure_cookies)
    .build();

    (jar.add(flash), Redirect::to("/contact")).into_response()
}
