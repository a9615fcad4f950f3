use std::sync::Arc;
use tracing::Instrument;

use crate::core::notifications::EmailComposer;
use crate::models::ConsultationRequest;
use crate::services::{Mailer, MailError};

/// Dispatches the operator notification and the client acknowledgment
///
/// The two sends are sequential. If the first fails the second is never
/// attempted; if the second fails the first has already been delivered.
/// Nothing is retried or deduplicated.
#[derive(Clone)]
pub struct ConsultationService {
    mailer: Arc<dyn Mailer>,
    composer: EmailComposer,
}

impl ConsultationService {
    pub fn new(mailer: Arc<dyn Mailer>, composer: EmailComposer) -> Self {
        Self { mailer, composer }
    }

    /// Compose and send both consultation emails
    pub async fn submit(&self, request: &ConsultationRequest) -> Result<(), MailError> {
        let span = tracing::info_span!("consultation", submission_id = %uuid::Uuid::new_v4());

        async move {
            let notification = self.composer.business_notification(request);
            let acknowledgment = self.composer.client_acknowledgment(request);

            self.mailer.send(&notification).await?;
            tracing::info!("Business notification sent to {}", notification.to);

            self.mailer.send(&acknowledgment).await?;
            tracing::info!("Acknowledgment sent to {}", acknowledgment.to);

            Ok(())
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BusinessProfile, OutgoingEmail};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records sends and fails the n-th one (0-based) when asked to
    #[derive(Default)]
    struct ScriptedMailer {
        fail_at: Option<usize>,
        attempts: Mutex<Vec<OutgoingEmail>>,
    }

    #[async_trait]
    impl Mailer for ScriptedMailer {
        async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
            let mut attempts = self.attempts.lock().unwrap();
            let index = attempts.len();
            attempts.push(email.clone());
            if self.fail_at == Some(index) {
                return Err(MailError::MissingConfig("scripted failure".to_string()));
            }
            Ok(())
        }
    }

    fn service(mailer: Arc<ScriptedMailer>) -> ConsultationService {
        let composer = EmailComposer::new(BusinessProfile::default(), "studio@example.com", "studio@example.com");
        ConsultationService::new(mailer, composer)
    }

    fn request() -> ConsultationRequest {
        ConsultationRequest {
            full_name: "Jessica Park".to_string(),
            email: "jessica@example.com".to_string(),
            phone: "555-0101".to_string(),
            wedding_date: None,
            dream_wedding: None,
        }
    }

    #[test]
    fn test_sends_business_then_client() {
        let mailer = Arc::new(ScriptedMailer::default());
        tokio_test::block_on(service(mailer.clone()).submit(&request())).unwrap();

        let attempts = mailer.attempts.lock().unwrap();
        assert_eq!(attempts.len(), 2);
        assert_eq!(attempts[0].to, "studio@example.com");
        assert_eq!(attempts[1].to, "jessica@example.com");
    }

    #[test]
    fn test_first_failure_skips_acknowledgment() {
        let mailer = Arc::new(ScriptedMailer { fail_at: Some(0), ..Default::default() });
        let result = tokio_test::block_on(service(mailer.clone()).submit(&request()));

        assert!(result.is_err());
        assert_eq!(mailer.attempts.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_second_failure_still_errors() {
        let mailer = Arc::new(ScriptedMailer { fail_at: Some(1), ..Default::default() });
        let result = tokio_test::block_on(service(mailer.clone()).submit(&request()));

        assert!(result.is_err());
        let attempts = mailer.attempts.lock().unwrap();
        assert_eq!(attempts.len(), 2);
        assert_eq!(attempts[0].to, "studio@example.com");
    }
}
