pub mod config;
pub mod error;
pub mod handlers;
pub mod store;

use std::sync::Arc;

use actix_web::web;

use crate::error::ApiError;
use crate::store::TaskStore;

/// Shared by every worker for the lifetime of the process.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TaskStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self { store }
    }
}

/// Registers the home page and the `/todo` API. The caller supplies
/// `web::Data<AppState>`.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::home).service(
        web::scope("/todo")
            .app_data(json_config())
            .service(handlers::list_todos)
            .service(handlers::create_todo)
            .service(handlers::update_todo)
            .service(handlers::delete_todo),
    );
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| ApiError::MalformedBody(err.to_string()).into())
}
