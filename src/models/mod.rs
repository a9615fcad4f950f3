// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{BusinessProfile, ConsultationRequest, OutgoingEmail};
pub use requests::ContactRequest;
pub use responses::{ErrorResponse, HealthResponse, MessageResponse};
