use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{ConsultationRequest, ContactRequest, ErrorResponse, HealthResponse, MessageResponse};
use crate::routes::AppState;

/// Configure the API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/contact", web::post().to(submit_consultation));
}

/// Health check endpoint
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Consultation request endpoint
///
/// POST /api/contact
///
/// Request body:
/// ```json
/// {
///   "fullName": "string",
///   "email": "string",
///   "phone": "string",
///   "weddingDate": "string (optional)",
///   "dreamWedding": "string (optional)"
/// }
/// ```
///
/// Sends the operator notification, then the client acknowledgment. Any
/// send failure yields a generic 500; the caller is not told which one.
async fn submit_consultation(
    state: web::Data<AppState>,
    req: web::Json<ContactRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!(
            "Rejected consultation request, missing fields {:?}: {}",
            req.missing_fields(),
            errors
        );
        return HttpResponse::BadRequest().json(ErrorResponse::new("Missing required fields"));
    }

    let request = ConsultationRequest::from(req.into_inner());

    match state.consultations.submit(&request).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Emails sent successfully")),
        Err(e) => {
            tracing::error!("Email sending error: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to send email"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body::to_bytes, http::StatusCode};

    #[actix_web::test]
    async fn test_health_check_response() {
        let response = health_check().await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body()).await.unwrap();
        let health: HealthResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(health.status, "ok");
        assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
    }
}
