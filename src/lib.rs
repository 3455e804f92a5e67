pub mod assets;
pub mod config;
pub mod content;
pub mod error;
pub mod observability;
pub mod routes;
pub mod template;

pub use routes::AppState;

/// Build the full application router from a loaded configuration.
///
/// Used by `main` and by integration tests, which drive the router directly
/// without binding a listener.
pub fn create_app(config: config::Config) -> axum::Router {
    routes::router(AppState::from_config(config))
}
