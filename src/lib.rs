//! Sol Imagery - marketing site and consultation request service
//!
//! Serves the single-page landing site and the `/api/contact` endpoint, which
//! validates a consultation request and sends an operator notification and a
//! client acknowledgment through an SMTP relay.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;
pub mod site;

use std::sync::Arc;

// Re-export commonly used types
pub use crate::core::{ConsultationService, EmailComposer, FormStatus};
pub use models::{BusinessProfile, ConsultationRequest, ContactRequest, OutgoingEmail};
pub use services::{Mailer, MailError, SmtpMailer};

use crate::config::Settings;
use crate::routes::AppState;

/// Assemble the shared handler state from settings and a mail transport
pub fn build_state(settings: &Settings, mailer: Arc<dyn Mailer>) -> AppState {
    let composer = EmailComposer::new(
        settings.business.clone(),
        settings.mail.sender(),
        settings.mail.business_inbox(),
    );
    let landing_page = site::render_page(
        &site::SiteContent::default(),
        &settings.business,
        &settings.site.image_base_url,
    );

    AppState {
        consultations: Arc::new(ConsultationService::new(mailer, composer)),
        landing_page: Arc::from(landing_page),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct NoopMailer;

    #[async_trait]
    impl Mailer for NoopMailer {
        async fn send(&self, _email: &OutgoingEmail) -> Result<(), MailError> {
            Ok(())
        }
    }

    #[test]
    fn test_build_state_renders_landing_page() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/default.toml");
        let mut settings = Settings::load_from(path).unwrap();
        settings.business.brand_name = "Golden Hour".to_string();
        settings.site.image_base_url = "https://cdn.example.com/img".to_string();

        let state = build_state(&settings, Arc::new(NoopMailer));

        assert!(state.landing_page.contains("<title>Golden Hour - Luxury Wedding Photography"));
        assert!(state.landing_page.contains("https://cdn.example.com/img/"));
    }
}
