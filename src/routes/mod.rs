// Route exports
pub mod contact;
pub mod site;

use actix_web::{error, web, HttpRequest, HttpResponse};
use std::sync::Arc;

use crate::core::ConsultationService;
use crate::models::ErrorResponse;

/// Largest accepted JSON body
const JSON_BODY_LIMIT: usize = 32 * 1024;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub consultations: Arc<ConsultationService>,
    /// Landing page, rendered once at startup
    pub landing_page: Arc<str>,
}

/// Answer malformed or unexpected JSON bodies with a 400 `{error}` payload
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(format!("Invalid request body: {}", err)));
    error::InternalError::from_response(err, response).into()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(JSON_BODY_LIMIT)
            .error_handler(handle_json_payload_error),
    )
    .configure(site::configure)
    .service(web::scope("/api").configure(contact::configure));
}
